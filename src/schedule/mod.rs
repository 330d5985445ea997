//! Deferred round reset.
//!
//! After a round ends (and the series is still live), the board stays
//! visible for a short beat before clearing. That delay belongs to the
//! presentation layer, not the engine: the engine only ever performs
//! plain synchronous resets, and this module gives the collaborator a
//! cancellable timer to drive them.
//!
//! The timer counts abstract ticks, never wall-clock time, so tests and
//! non-interactive callers can drive it deterministically.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ticks between a round ending and the board clearing.
pub const RESET_DELAY_TICKS: u32 = 2;

/// A cancellable one-shot countdown.
///
/// `schedule()` arms it, `tick()` counts it down and reports the single
/// tick on which it fires, `cancel()` disarms it. Re-scheduling while
/// armed restarts the countdown; cancelling while idle is a no-op. A
/// cancelled timer can never fire from a stale schedule, which is what
/// lets "new game" win over a pending reset.
///
/// ## Example
///
/// ```
/// use ttt_series::schedule::{ResetTimer, RESET_DELAY_TICKS};
///
/// let mut timer = ResetTimer::new();
/// timer.schedule();
/// assert!(!timer.tick());
/// assert!(timer.tick()); // fires on the second tick
/// assert!(!timer.is_pending());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetTimer {
    remaining: Option<u32>,
}

impl ResetTimer {
    /// Create an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer for [`RESET_DELAY_TICKS`] ticks.
    ///
    /// Restarts the countdown if already armed.
    pub fn schedule(&mut self) {
        self.remaining = Some(RESET_DELAY_TICKS);
        debug!(ticks = RESET_DELAY_TICKS, "reset scheduled");
    }

    /// Disarm the timer. No-op if idle.
    pub fn cancel(&mut self) {
        if self.remaining.take().is_some() {
            debug!("pending reset cancelled");
        }
    }

    /// Check whether a reset is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance one tick. Returns true exactly once, on the tick the
    /// countdown reaches zero.
    pub fn tick(&mut self) -> bool {
        match self.remaining {
            None => false,
            Some(1) => {
                self.remaining = None;
                true
            }
            Some(n) => {
                self.remaining = Some(n - 1);
                false
            }
        }
    }
}
