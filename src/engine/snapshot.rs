//! Read model handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Mark, RoundResult, SeriesState};

/// A point-in-time copy of everything a renderer needs.
///
/// Cheap to take after every engine call; the presentation layer
/// derives all of its output from this, never from its own bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub board: Board,
    pub turn: Mark,
    pub round_result: RoundResult,
    pub series: SeriesState,
}
