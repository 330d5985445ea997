//! Core game types: marks, cells, the board, round and series state.
//!
//! These are plain value types with no engine behavior; the rules that
//! tie them together (silent rejection, turn flipping, score credit)
//! live in [`crate::engine`].

pub mod board;
pub mod cell;
pub mod record;
pub mod round;
pub mod series;

pub use board::{Board, CELL_COUNT, WIN_LINES};
pub use cell::{Cell, Mark};
pub use record::MoveRecord;
pub use round::RoundResult;
pub use series::{SeriesState, SeriesVerdict, ROUNDS_PER_SERIES};
