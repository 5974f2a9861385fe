#![forbid(unsafe_code)]

//! Per-run operation counters and active computation time.

use std::time::Duration;

use crate::stepper::StepOutcome;

/// Counters for the current run.
///
/// `comparisons` and `swaps` only grow within a run; `elapsed` only includes
/// time spent inside stepper calls, never pacing delay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub comparisons: u64,
    pub swaps: u64,
    pub elapsed: Duration,
}

impl Metrics {
    /// Fold one step's deltas and its measured duration into the totals.
    pub fn record(&mut self, outcome: &StepOutcome, spent: Duration) {
        self.comparisons = self
            .comparisons
            .saturating_add(u64::from(outcome.comparisons));
        self.swaps = self.swaps.saturating_add(u64::from(outcome.swaps));
        self.elapsed = self.elapsed.saturating_add(spent);
    }

    /// Elapsed active time in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Zero every counter.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
