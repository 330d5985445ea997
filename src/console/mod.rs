//! Presentation collaborator: text rendering and the session driver.
//!
//! Everything here derives its output from engine state; no game logic
//! lives in this module.

pub mod session;
pub mod view;

pub use session::{MatchSession, SessionEvent};
pub use view::{
    render_board, round_drawn_message, round_won_message, series_verdict_message,
    OPENING_PROMPT,
};
