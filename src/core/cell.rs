//! Marks and cells: the two players' symbols and the three cell states.
//!
//! ## Mark
//!
//! The symbol a player places, `X` or `O`. Also used as the "whose turn
//! is it" flag, since the mover and the mark are the same thing here.
//!
//! ## Cell
//!
//! One square of the board: `Empty` or taken by a mark. A taken cell is
//! never reverted except by a full round reset.

use serde::{Deserialize, Serialize};

/// A player's mark, `X` or `O`.
///
/// Doubles as the turn indicator: the engine tracks the current mover
/// as a `Mark`.
///
/// ## Example
///
/// ```
/// use ttt_series::core::Mark;
///
/// assert_eq!(Mark::X.opponent(), Mark::O);
/// assert_eq!(Mark::O.opponent(), Mark::X);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the other player's mark.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// One square of the board.
///
/// Exactly one of three states; `Taken` wraps the mark that occupies
/// the square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Mark),
}

impl Cell {
    /// Check whether the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the occupying mark, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(mark) => Some(mark),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Taken(mark)
    }
}
