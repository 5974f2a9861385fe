#![forbid(unsafe_code)]

//! Normalised completion estimate with a monotonic high-water mark.
//!
//! Quadratic sorts report `outer / len`. Quick and merge sort have no single
//! advancing index, so they report the fraction of adjacent pairs already in
//! order. That heuristic can stall or briefly drop; the ratchet hides this
//! from the progress bar.

use crate::stepper::AlgorithmState;

/// Raw completion estimate in `[0, 1]` for the current data and state.
#[must_use]
pub fn raw_progress(data: &[u32], state: &AlgorithmState) -> f32 {
    let len = data.len();
    if len == 0 {
        return 0.0;
    }
    let raw = match state.outer_index() {
        Some(outer) => outer as f32 / len as f32,
        None => sorted_pair_fraction(data),
    };
    raw.clamp(0.0, 1.0)
}

/// Fraction of adjacent pairs `k, k+1` with `data[k] <= data[k+1]`.
#[must_use]
pub fn sorted_pair_fraction(data: &[u32]) -> f32 {
    let total = data.len().saturating_sub(1).max(1);
    let sorted = data.windows(2).filter(|w| w[0] <= w[1]).count();
    sorted as f32 / total as f32
}

/// Ratchet over raw estimates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressEstimator {
    max_seen: f32,
}

impl ProgressEstimator {
    #[must_use]
    pub const fn new() -> Self {
        Self { max_seen: 0.0 }
    }

    /// Current high-water mark.
    #[must_use]
    pub const fn value(&self) -> f32 {
        self.max_seen
    }

    /// Feed one raw estimate and return the updated mark.
    ///
    /// A sorted run always reports 1. A run that has not compared anything yet
    /// reports 0, so a stale mark from a previous run never carries over.
    pub fn observe(&mut self, raw: f32, comparisons: u64, sorted: bool) -> f32 {
        let raw = if sorted { 1.0 } else { raw.clamp(0.0, 1.0) };
        if raw > self.max_seen {
            self.max_seen = raw;
        }
        if comparisons == 0 && !sorted {
            self.max_seen = 0.0;
        }
        self.max_seen
    }

    /// Drop the mark back to zero.
    pub fn reset(&mut self) {
        self.max_seen = 0.0;
    }
}
