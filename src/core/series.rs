//! Series bookkeeping: cumulative scores across the best-of-five match.

use serde::{Deserialize, Serialize};

use super::cell::Mark;

/// Rounds in a full series.
pub const ROUNDS_PER_SERIES: u32 = 5;

/// Cumulative match state across rounds.
///
/// Scores only ever grow; `rounds_played` counts completed rounds
/// (wins and draws both count). `series_over` latches once
/// `rounds_played` reaches [`ROUNDS_PER_SERIES`] and is cleared only by
/// a series reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesState {
    pub score_x: u32,
    pub score_o: u32,
    pub rounds_played: u32,
    pub series_over: bool,
}

impl SeriesState {
    /// Create a fresh series: both scores zero, no rounds played.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `mark`.
    #[must_use]
    pub fn score(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.score_x,
            Mark::O => self.score_o,
        }
    }

    /// Credit a round win to `mark` and count the round.
    ///
    /// Sets `series_over` when this was the final round.
    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.score_x += 1,
            Mark::O => self.score_o += 1,
        }
        self.record_round();
    }

    /// Count a drawn round; scores unchanged.
    ///
    /// Sets `series_over` when this was the final round.
    pub fn record_draw(&mut self) {
        self.record_round();
    }

    fn record_round(&mut self) {
        self.rounds_played += 1;
        if self.rounds_played >= ROUNDS_PER_SERIES {
            self.series_over = true;
        }
    }

    /// Zero everything back to a fresh series.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// The outcome of a completed series.
///
/// A pure function of the two scores; see [`SeriesVerdict::from_scores`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeriesVerdict {
    XWins,
    OWins,
    Tie,
}

impl SeriesVerdict {
    /// Compare the two scores: strictly higher wins, equal is a tie.
    ///
    /// ## Example
    ///
    /// ```
    /// use ttt_series::core::SeriesVerdict;
    ///
    /// assert_eq!(SeriesVerdict::from_scores(3, 2), SeriesVerdict::XWins);
    /// assert_eq!(SeriesVerdict::from_scores(1, 4), SeriesVerdict::OWins);
    /// assert_eq!(SeriesVerdict::from_scores(2, 2), SeriesVerdict::Tie);
    /// ```
    #[must_use]
    pub const fn from_scores(score_x: u32, score_o: u32) -> Self {
        if score_x > score_o {
            SeriesVerdict::XWins
        } else if score_o > score_x {
            SeriesVerdict::OWins
        } else {
            SeriesVerdict::Tie
        }
    }

    /// The winning mark, if the series was not tied.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            SeriesVerdict::XWins => Some(Mark::X),
            SeriesVerdict::OWins => Some(Mark::O),
            SeriesVerdict::Tie => None,
        }
    }
}
