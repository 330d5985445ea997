//! Round outcome: in progress, won by a player, or drawn.

use serde::{Deserialize, Serialize};

use super::cell::Mark;

/// The state of the current round.
///
/// A round starts `InProgress` and moves to exactly one of the three
/// terminal states when a placement resolves it. Terminal states only
/// go away via a round reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundResult {
    InProgress,
    WinX,
    WinO,
    Draw,
}

impl RoundResult {
    /// Check whether the round has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, RoundResult::InProgress)
    }

    /// The winning mark, if the round was won.
    #[must_use]
    pub const fn winner(self) -> Option<Mark> {
        match self {
            RoundResult::WinX => Some(Mark::X),
            RoundResult::WinO => Some(Mark::O),
            RoundResult::InProgress | RoundResult::Draw => None,
        }
    }

    /// The win result for `mark`.
    #[must_use]
    pub const fn win_for(mark: Mark) -> Self {
        match mark {
            Mark::X => RoundResult::WinX,
            Mark::O => RoundResult::WinO,
        }
    }
}
