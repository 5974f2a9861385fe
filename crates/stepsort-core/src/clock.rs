#![forbid(unsafe_code)]

//! Monotonic time source used to measure time spent inside stepper calls.

use std::time::{Duration, Instant};

/// Monotonic clock abstraction.
///
/// The controller only ever subtracts two readings, so the epoch is arbitrary.
pub trait Clock {
    /// Current monotonic time since the clock's epoch.
    fn now_mono(&self) -> Duration;
}

/// Monotonic clock backed by `std::time::Instant`.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_mono(&self) -> Duration {
        self.epoch.elapsed()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_mono(&self) -> Duration {
        (**self).now_mono()
    }
}
