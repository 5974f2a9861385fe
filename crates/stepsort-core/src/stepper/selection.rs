#![forbid(unsafe_code)]

use super::{Highlights, StepOutcome};

/// Selection sort progress.
///
/// Everything before `outer` is final and no larger than anything after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    outer: usize,
    scan: usize,
    min_idx: usize,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outer: 0,
            scan: 1,
            min_idx: 0,
        }
    }

    /// Slot currently being filled.
    #[must_use]
    pub const fn outer(&self) -> usize {
        self.outer
    }

    /// Index being compared against the running minimum.
    #[must_use]
    pub const fn scan(&self) -> usize {
        self.scan
    }

    /// Index of the smallest element seen so far in this scan.
    #[must_use]
    pub const fn min_idx(&self) -> usize {
        self.min_idx
    }

    /// Compare `scan` against the running minimum; at the end of a scan, swap
    /// the minimum into `outer`.
    pub fn step(&mut self, data: &mut [u32]) -> StepOutcome {
        let len = data.len();
        if self.outer + 1 >= len {
            return StepOutcome::finished();
        }

        let mut outcome = StepOutcome::compared(data[self.scan]);
        if data[self.scan] < data[self.min_idx] {
            self.min_idx = self.scan;
        }

        self.scan += 1;
        if self.scan >= len {
            data.swap(self.outer, self.min_idx);
            outcome.swaps = 1;
            self.outer += 1;
            self.scan = self.outer + 1;
            self.min_idx = self.outer;
            outcome.finished = self.outer + 1 >= len;
        }
        outcome
    }

    pub(super) fn highlights(&self, len: usize) -> Highlights {
        let active = if self.scan < len {
            vec![self.scan]
        } else {
            Vec::new()
        };
        Highlights {
            active,
            marker: (self.min_idx < len).then_some(self.min_idx),
            settled: 0..self.outer.min(len),
            ..Highlights::default()
        }
    }
}
