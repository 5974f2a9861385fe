#![forbid(unsafe_code)]

//! Artificial slow-down between ticks.
//!
//! The pause is chosen after a tick has run, so it never lands inside the
//! engine's measured step time.

use std::time::Duration;

use stepsort_core::controller::{Phase, StepSnapshot};

/// Fixed pause after each shuffle swap.
pub const SHUFFLE_DELAY: Duration = Duration::from_millis(1);
/// Extra pause while a merge copies values back, which otherwise flashes by.
pub const MERGE_COPY_EXTRA: Duration = Duration::from_millis(2);
/// Granularity of one Up/Down key press.
pub const DELAY_STEP: Duration = Duration::from_millis(1);

/// User-adjustable delay per algorithm step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Shorten the delay, stopping at zero.
    pub fn faster(&mut self) {
        self.delay = self.delay.saturating_sub(DELAY_STEP);
    }

    /// Lengthen the delay.
    pub fn slower(&mut self) {
        self.delay = self.delay.saturating_add(DELAY_STEP);
    }

    /// How long to wait after the tick that produced `snapshot`.
    #[must_use]
    pub fn pause_after(&self, snapshot: &StepSnapshot<'_>) -> Duration {
        match snapshot.phase {
            Phase::Shuffling { .. } => SHUFFLE_DELAY,
            Phase::Stepping if snapshot.merging => self.delay + MERGE_COPY_EXTRA,
            Phase::Stepping => self.delay,
            Phase::Idle | Phase::Sorted => Duration::ZERO,
        }
    }
}
