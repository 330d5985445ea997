//! # ttt-series
//!
//! A best-of-five tic-tac-toe match engine with a thin console front.
//!
//! ## Design Principles
//!
//! 1. **One Engine, No Globals**: All mutable state (board, turn,
//!    scores, round count) lives in a single [`MatchEngine`] instance
//!    created per session.
//!
//! 2. **Silent Rejection**: Illegal placements (taken cell, finished
//!    round, finished series) are no-ops, never errors. The one
//!    contract error is an out-of-range index, which panics.
//!
//! 3. **Synchronous Core**: The engine never blocks, suspends, or reads
//!    a clock. The only temporal behavior, the deferred round reset, is
//!    owned by the presentation layer and counted in abstract ticks.
//!
//! ## Modules
//!
//! - `core`: Marks, cells, the board, round and series state
//! - `engine`: The match engine and its read-model snapshot
//! - `schedule`: Cancellable deferred-reset timer for the collaborator
//! - `console`: Text rendering and the event-driven session driver

pub mod console;
pub mod core;
pub mod engine;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Mark, MoveRecord, RoundResult, SeriesState, SeriesVerdict,
    CELL_COUNT, ROUNDS_PER_SERIES, WIN_LINES,
};

pub use crate::engine::{EngineSnapshot, MatchEngine};

pub use crate::schedule::{ResetTimer, RESET_DELAY_TICKS};

pub use crate::console::{MatchSession, SessionEvent};
