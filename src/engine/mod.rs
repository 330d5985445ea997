//! The match engine and its read model.

pub mod match_engine;
pub mod snapshot;

pub use match_engine::MatchEngine;
pub use snapshot::EngineSnapshot;
