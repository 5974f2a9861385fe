#![forbid(unsafe_code)]

use super::{Highlights, StepOutcome};

/// An in-progress Lomuto partition of `data[low..=high]`.
///
/// The pivot is always `data[high]`. Elements in `low..boundary` are known to
/// be smaller than the pivot; `cursor` is the next element to classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    pub low: usize,
    pub high: usize,
    pub boundary: usize,
    pub cursor: usize,
}

/// Iterative quick sort progress.
///
/// `pending` holds disjoint ranges still to be partitioned. Ranges with fewer
/// than two elements are never pushed, which is what guarantees termination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuickState {
    pending: Vec<(usize, usize)>,
    partition: Option<Partition>,
}

impl QuickState {
    #[must_use]
    pub fn new(len: usize) -> Self {
        let pending = if len >= 2 {
            vec![(0, len - 1)]
        } else {
            Vec::new()
        };
        Self {
            pending,
            partition: None,
        }
    }

    /// Ranges waiting to be partitioned; the last entry is popped next.
    #[must_use]
    pub fn pending(&self) -> &[(usize, usize)] {
        &self.pending
    }

    /// The partition in progress, if any.
    #[must_use]
    pub fn partition(&self) -> Option<&Partition> {
        self.partition.as_ref()
    }

    /// Either start partitioning the next pending range, classify one element
    /// against the pivot, or place the pivot and split the range.
    pub fn step(&mut self, data: &mut [u32]) -> StepOutcome {
        let Some(mut part) = self.partition else {
            return match self.pending.pop() {
                None => StepOutcome::finished(),
                Some((low, high)) => {
                    self.partition = Some(Partition {
                        low,
                        high,
                        boundary: low,
                        cursor: low,
                    });
                    StepOutcome::bookkeeping()
                }
            };
        };

        let mut outcome = StepOutcome::bookkeeping();
        outcome.tone = Some(data[part.cursor]);

        if part.cursor < part.high {
            outcome.comparisons = 1;
            if data[part.cursor] < data[part.high] {
                data.swap(part.boundary, part.cursor);
                outcome.swaps = 1;
                part.boundary += 1;
            }
            part.cursor += 1;
            self.partition = Some(part);
            return outcome;
        }

        data.swap(part.boundary, part.high);
        outcome.swaps = 1;
        let pivot = part.boundary;
        if pivot + 1 < part.high {
            self.pending.push((pivot + 1, part.high));
        }
        if part.low + 1 < pivot {
            self.pending.push((part.low, pivot - 1));
        }
        crate::trace!(
            low = part.low,
            high = part.high,
            pivot,
            pending = self.pending.len(),
            "partition placed pivot"
        );
        self.partition = None;
        outcome
    }

    pub(super) fn highlights(&self) -> Highlights {
        match self.partition {
            Some(part) => Highlights {
                active: vec![part.cursor],
                marker: Some(part.high),
                ..Highlights::default()
            },
            None => Highlights::default(),
        }
    }
}
