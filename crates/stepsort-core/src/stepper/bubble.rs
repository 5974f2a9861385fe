#![forbid(unsafe_code)]

use super::{Highlights, StepOutcome};

/// Bubble sort progress.
///
/// After `pass` completed passes the last `pass` elements are in their final
/// positions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BubbleState {
    pass: usize,
    cursor: usize,
}

impl BubbleState {
    #[must_use]
    pub const fn new() -> Self {
        Self { pass: 0, cursor: 0 }
    }

    /// Completed passes (the outer index).
    #[must_use]
    pub const fn pass(&self) -> usize {
        self.pass
    }

    /// Left index of the next pair to compare.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Compare `cursor` with `cursor + 1`, swapping if out of order.
    pub fn step(&mut self, data: &mut [u32]) -> StepOutcome {
        let len = data.len();
        if len < 2 || self.pass + 1 >= len {
            return StepOutcome::finished();
        }

        let j = self.cursor;
        let mut outcome = StepOutcome::compared(data[j + 1]);
        if data[j] > data[j + 1] {
            data.swap(j, j + 1);
            outcome.swaps = 1;
        }

        self.cursor += 1;
        if self.cursor >= len - 1 - self.pass {
            self.cursor = 0;
            self.pass += 1;
            outcome.finished = self.pass >= len - 1;
        }
        outcome
    }

    pub(super) fn highlights(&self, len: usize) -> Highlights {
        let active = if self.cursor + 1 < len {
            vec![self.cursor, self.cursor + 1]
        } else {
            Vec::new()
        };
        Highlights {
            active,
            settled: len.saturating_sub(self.pass)..len,
            ..Highlights::default()
        }
    }
}
