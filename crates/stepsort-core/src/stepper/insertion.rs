#![forbid(unsafe_code)]

use super::{Highlights, StepOutcome};

/// Insertion sort progress.
///
/// `outer` is the element being inserted; `cursor` is where it currently sits
/// while it sifts left. Everything before `outer` is a sorted prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionState {
    outer: usize,
    cursor: usize,
}

impl Default for InsertionState {
    fn default() -> Self {
        Self::new()
    }
}

impl InsertionState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outer: 1,
            cursor: 1,
        }
    }

    #[must_use]
    pub const fn outer(&self) -> usize {
        self.outer
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Compare `cursor` with its left neighbour, swapping left if smaller;
    /// otherwise move on to the next element.
    ///
    /// A cursor that has reached index 0 has no neighbour, so that step
    /// advances without counting a comparison.
    pub fn step(&mut self, data: &mut [u32]) -> StepOutcome {
        let len = data.len();
        if self.outer >= len {
            return StepOutcome::finished();
        }

        let j = self.cursor;
        let mut outcome = StepOutcome::bookkeeping();
        outcome.tone = Some(data[j]);

        if j > 0 {
            outcome.comparisons = 1;
            if data[j] < data[j - 1] {
                data.swap(j, j - 1);
                outcome.swaps = 1;
                self.cursor -= 1;
                return outcome;
            }
        }

        self.outer += 1;
        self.cursor = self.outer;
        outcome.finished = self.outer >= len;
        outcome
    }

    pub(super) fn highlights(&self, len: usize) -> Highlights {
        let active = if self.cursor < len {
            vec![self.cursor]
        } else {
            Vec::new()
        };
        Highlights {
            active,
            ..Highlights::default()
        }
    }
}
