use std::time::{Duration, Instant};
use thiserror::Error;

/// Raised by any recursive search layer once the remaining budget drops
/// below the safety threshold. Carries no partial result: every active
/// frame unwinds and the driver falls back to its last complete answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("search deadline exceeded")]
pub struct SearchTimeout;

/// Headroom left for the unwind and the caller's own bookkeeping, in
/// milliseconds.
pub const TIMER_THRESHOLD_MS: f64 = 10.0;

/// Polled deadline for one top-level `get_move` call. Wraps the caller's
/// remaining-time accessor (milliseconds, monotonically decreasing); every
/// recursive entry point calls `check` before doing further work.
pub struct Clock<'a> {
    time_left: Box<dyn Fn() -> f64 + 'a>,
    threshold_ms: f64,
}

impl<'a> Clock<'a> {
    pub fn new(time_left: impl Fn() -> f64 + 'a) -> Self {
        Clock {
            time_left: Box::new(time_left),
            threshold_ms: TIMER_THRESHOLD_MS,
        }
    }

    pub fn with_threshold(time_left: impl Fn() -> f64 + 'a, threshold_ms: f64) -> Self {
        Clock {
            time_left: Box::new(time_left),
            threshold_ms,
        }
    }

    /// Clock over a fixed wall-clock budget starting now.
    pub fn from_budget(budget: Duration) -> Clock<'static> {
        let deadline = Instant::now() + budget;
        Clock::new(move || deadline.saturating_duration_since(Instant::now()).as_secs_f64() * 1e3)
    }

    /// Clock that never expires, for fixed-depth searches in tests.
    pub fn unlimited() -> Clock<'static> {
        Clock::new(|| f64::INFINITY)
    }

    pub fn remaining_ms(&self) -> f64 {
        (self.time_left)()
    }

    pub fn check(&self) -> Result<(), SearchTimeout> {
        if self.remaining_ms() < self.threshold_ms {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }
}
