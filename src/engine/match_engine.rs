//! The match engine: one instance owns the whole game session.
//!
//! All state lives in fields of a single `MatchEngine`; there are no
//! process-wide globals. Operations are synchronous, instantaneous
//! state transitions. Invalid input is silently rejected rather than
//! reported: clicking a taken cell, a finished round, or a finished
//! series simply does nothing.

use im::Vector;
use tracing::{debug, info};

use crate::core::{
    Board, Mark, MoveRecord, RoundResult, SeriesState, SeriesVerdict,
};

use super::snapshot::EngineSnapshot;

/// Best-of-five tic-tac-toe match engine.
///
/// ## Example
///
/// ```
/// use ttt_series::engine::MatchEngine;
/// use ttt_series::core::{Mark, RoundResult};
///
/// let mut engine = MatchEngine::new();
/// assert_eq!(engine.turn(), Mark::X);
///
/// // X takes the top row while O plays along the middle row.
/// engine.place_mark(0);
/// engine.place_mark(3);
/// engine.place_mark(1);
/// engine.place_mark(4);
/// assert_eq!(engine.place_mark(2), RoundResult::WinX);
/// assert_eq!(engine.series().score_x, 1);
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    board: Board,
    turn: Mark,
    round_result: RoundResult,
    series: SeriesState,
    /// Full match log; persists across round resets, cleared on series reset.
    history: Vector<MoveRecord>,
    /// Current round number, 1-based.
    round: u32,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchEngine {
    /// Create a fresh engine: empty board, X to move, scores at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            round_result: RoundResult::InProgress,
            series: SeriesState::new(),
            history: Vector::new(),
            round: 1,
        }
    }

    // === Accessors ===

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is.
    ///
    /// Note the turn flips after every accepted placement, including one
    /// that ends the round; the flipped value is inert then, since a
    /// reset puts it back to X.
    #[must_use]
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// The current round's result.
    #[must_use]
    pub fn round_result(&self) -> RoundResult {
        self.round_result
    }

    /// Cumulative series state.
    #[must_use]
    pub fn series(&self) -> &SeriesState {
        &self.series
    }

    /// Current round number, 1-based.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Every accepted placement this series, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The move that most recently landed on the board, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<MoveRecord> {
        self.history.last().copied()
    }

    /// Read model for rendering: `{board, turn, round_result, series}`.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            board: self.board,
            turn: self.turn,
            round_result: self.round_result,
            series: self.series,
        }
    }

    /// Check whether a placement at `index` would be accepted.
    ///
    /// True iff the cell is empty, the round is in progress, and the
    /// series is still live. This is also the hover-affordance
    /// predicate for the presentation layer.
    #[must_use]
    pub fn is_playable(&self, index: usize) -> bool {
        !self.series.series_over
            && !self.round_result.is_terminal()
            && self.board.cell(index).is_empty()
    }

    // === Operations ===

    /// Place the current mover's mark at `index`.
    ///
    /// Silent no-op (returns the unchanged round result) when the
    /// series is over, the round already has a terminal result, or the
    /// cell is taken. Otherwise the mark lands, the round is resolved
    /// (win first, then draw), scores and the round count update, and
    /// the turn flips.
    ///
    /// When the fifth round completes inside this call, `series_over`
    /// becomes true and [`series_verdict`](Self::series_verdict) is
    /// readable immediately; no second call is needed.
    ///
    /// Panics if `index` is not 0-8; indices come from a fixed
    /// nine-cell layout, so out-of-range is a caller bug.
    pub fn place_mark(&mut self, index: usize) -> RoundResult {
        if !self.is_playable(index) {
            debug!(index, result = ?self.round_result, "placement rejected");
            return self.round_result;
        }

        let mark = self.turn;
        self.board.place(index, mark);
        self.history
            .push_back(MoveRecord::new(mark, index, self.round));
        debug!(index, %mark, "placement accepted");

        if self.board.has_win(mark) {
            self.round_result = RoundResult::win_for(mark);
            self.series.record_win(mark);
            info!(
                round = self.round,
                winner = %mark,
                score_x = self.series.score_x,
                score_o = self.series.score_o,
                "round won"
            );
        } else if self.board.is_full() {
            self.round_result = RoundResult::Draw;
            self.series.record_draw();
            info!(
                round = self.round,
                score_x = self.series.score_x,
                score_o = self.series.score_o,
                "round drawn"
            );
        }

        // The turn flips even when the round just ended; a reset
        // overwrites it to X before the next round starts.
        self.turn = self.turn.opponent();

        if self.series.series_over {
            info!(verdict = ?self.series_verdict(), "series over");
        }

        self.round_result
    }

    /// The series outcome, once the series is over.
    ///
    /// A pure function of the two scores: strictly higher wins, equal
    /// is a tie. `None` while the series is still live.
    #[must_use]
    pub fn series_verdict(&self) -> Option<SeriesVerdict> {
        if self.series.series_over {
            Some(SeriesVerdict::from_scores(
                self.series.score_x,
                self.series.score_o,
            ))
        } else {
            None
        }
    }

    /// Start the next round: clear the board, X to move, result back to
    /// `InProgress`. Series counters are untouched.
    ///
    /// Harmless if called while a round is still in progress; only
    /// round state is affected.
    pub fn reset_round(&mut self) {
        if self.round_result.is_terminal() {
            self.round += 1;
        }
        self.board.clear();
        self.turn = Mark::X;
        self.round_result = RoundResult::InProgress;
        debug!(round = self.round, "round reset");
    }

    /// Start a whole new series: scores, round count, and history all
    /// zeroed, then the round is reset too.
    ///
    /// Safe mid-round; the abandoned round credits no score.
    pub fn reset_series(&mut self) {
        self.series.reset();
        self.history.clear();
        // Clear the result first so reset_round does not advance the
        // round counter past an abandoned terminal round.
        self.round_result = RoundResult::InProgress;
        self.reset_round();
        self.round = 1;
        info!("series reset");
    }
}
