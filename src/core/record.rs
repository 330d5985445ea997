//! Move history entries.
//!
//! One record per accepted placement, kept for rendering the last move
//! and for post-game inspection. The engine clears the history on a
//! series reset but keeps it across round resets, so a full match log
//! survives until "new game".

use serde::{Deserialize, Serialize};

use super::cell::Mark;

/// A recorded placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The mark that was placed.
    pub mark: Mark,

    /// Board index 0-8 where it landed.
    pub index: usize,

    /// Round number when the move was made (1-based).
    pub round: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(mark: Mark, index: usize, round: u32) -> Self {
        Self { mark, index, round }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_record() {
        let record = MoveRecord::new(Mark::X, 4, 2);
        assert_eq!(record.mark, Mark::X);
        assert_eq!(record.index, 4);
        assert_eq!(record.round, 2);
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord::new(Mark::O, 7, 1);
        let json = serde_json::to_string(&record).unwrap();
        let back: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
