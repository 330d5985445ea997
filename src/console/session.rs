//! Session driver: wires input events to the engine and the timer.
//!
//! This is the presentation collaborator from the engine's point of
//! view. It owns one [`MatchEngine`] and one [`ResetTimer`], consumes
//! discrete [`SessionEvent`]s in arrival order, and keeps a status line
//! derived from engine state. It holds no game state of its own.

use tracing::debug;

use crate::core::RoundResult;
use crate::engine::{EngineSnapshot, MatchEngine};
use crate::schedule::ResetTimer;

use super::view;

/// A discrete input to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The player activated a cell (0-8).
    CellActivated(usize),
    /// The player asked for a new game.
    NewGame,
    /// One abstract time unit passed.
    Tick,
}

/// One interactive match session.
///
/// ## Example
///
/// ```
/// use ttt_series::console::{MatchSession, SessionEvent};
///
/// let mut session = MatchSession::new();
/// session.handle(SessionEvent::CellActivated(4));
/// assert!(!session.can_hover(4)); // taken now
/// assert!(session.can_hover(0));
/// ```
#[derive(Clone, Debug)]
pub struct MatchSession {
    engine: MatchEngine,
    timer: ResetTimer,
    status: String,
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSession {
    /// Create a session with a fresh engine and the opening prompt.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: MatchEngine::new(),
            timer: ResetTimer::new(),
            status: view::OPENING_PROMPT.to_string(),
        }
    }

    /// The engine, for direct state reads.
    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Current status line.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The board rendered as text.
    #[must_use]
    pub fn render_board(&self) -> String {
        view::render_board(self.engine.board())
    }

    /// Snapshot of the engine state after the last event.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        self.engine.snapshot()
    }

    /// Whether the hover affordance applies to `index`: empty cell,
    /// round in progress, series live.
    #[must_use]
    pub fn can_hover(&self, index: usize) -> bool {
        self.engine.is_playable(index)
    }

    /// Whether a deferred round reset is pending.
    #[must_use]
    pub fn reset_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Process one event. Events are handled strictly in call order.
    pub fn handle(&mut self, event: SessionEvent) {
        debug!(?event, "session event");
        match event {
            SessionEvent::CellActivated(index) => self.on_cell(index),
            SessionEvent::NewGame => self.on_new_game(),
            SessionEvent::Tick => self.on_tick(),
        }
    }

    fn on_cell(&mut self, index: usize) {
        let result = self.engine.place_mark(index);
        let series = *self.engine.series();

        match result {
            RoundResult::InProgress => {}
            RoundResult::WinX | RoundResult::WinO => {
                if let Some(verdict) = self.engine.series_verdict() {
                    self.status = view::series_verdict_message(verdict, &series);
                } else if let Some(winner) = result.winner() {
                    // Round message stays up while the timer runs.
                    self.status = view::round_won_message(winner, &series);
                    self.timer.schedule();
                }
            }
            RoundResult::Draw => {
                if let Some(verdict) = self.engine.series_verdict() {
                    self.status = view::series_verdict_message(verdict, &series);
                } else {
                    self.status = view::round_drawn_message(&series);
                    self.timer.schedule();
                }
            }
        }
    }

    fn on_new_game(&mut self) {
        // Cancel first so a stale pending reset cannot fire into the
        // fresh series.
        self.timer.cancel();
        self.engine.reset_series();
        self.status = view::OPENING_PROMPT.to_string();
    }

    fn on_tick(&mut self) {
        if self.timer.tick() {
            self.engine.reset_round();
        }
    }
}
