#![forbid(unsafe_code)]

use super::{Highlights, StepOutcome};

/// Cursors for one in-progress merge of `left..=mid` with `mid+1..=right`.
///
/// `i` and `j` read from the scratch copy; `k` is the next slot written in
/// the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCursor {
    pub left: usize,
    pub mid: usize,
    pub right: usize,
    pub i: usize,
    pub j: usize,
    pub k: usize,
}

/// Bottom-up merge sort progress.
///
/// Before a pass starts, the data consists of sorted runs of `run_size`
/// elements (the last run may be shorter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeState {
    scratch: Vec<u32>,
    run_size: usize,
    left_start: usize,
    cursor: Option<MergeCursor>,
}

impl MergeState {
    #[must_use]
    pub fn new(data: &[u32]) -> Self {
        Self {
            scratch: data.to_vec(),
            run_size: 1,
            left_start: 0,
            cursor: None,
        }
    }

    /// Length of the sorted runs being merged in the current pass.
    #[must_use]
    pub const fn run_size(&self) -> usize {
        self.run_size
    }

    /// Start of the next left block in the current pass.
    #[must_use]
    pub const fn left_start(&self) -> usize {
        self.left_start
    }

    /// The merge in progress, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<&MergeCursor> {
        self.cursor.as_ref()
    }

    /// Set up the next merge, write one merged value, or close a merge.
    pub fn step(&mut self, data: &mut [u32]) -> StepOutcome {
        debug_assert_eq!(self.scratch.len(), data.len());

        let Some(mut cur) = self.cursor else {
            return self.begin_merge(data);
        };

        if cur.k > cur.right {
            self.cursor = None;
            self.left_start = self.left_start.saturating_add(2 * self.run_size);
            return StepOutcome::bookkeeping();
        }

        // Left-biased on ties, which keeps the sort stable.
        let take_left =
            cur.i <= cur.mid && (cur.j > cur.right || self.scratch[cur.i] <= self.scratch[cur.j]);
        let value = if take_left {
            cur.i += 1;
            self.scratch[cur.i - 1]
        } else {
            cur.j += 1;
            self.scratch[cur.j - 1]
        };
        data[cur.k] = value;
        cur.k += 1;
        self.cursor = Some(cur);

        StepOutcome {
            comparisons: 1,
            swaps: 1,
            tone: Some(value),
            finished: false,
        }
    }

    fn begin_merge(&mut self, data: &[u32]) -> StepOutcome {
        let len = data.len();
        if self.run_size >= len {
            return StepOutcome::finished();
        }

        if self.left_start + 1 >= len {
            self.run_size = self.run_size.saturating_mul(2);
            self.left_start = 0;
            crate::trace!(run_size = self.run_size, "merge pass complete");
            return StepOutcome::bookkeeping();
        }

        let left = self.left_start;
        let mid = left.saturating_add(self.run_size - 1).min(len - 1);
        let right = left.saturating_add(2 * self.run_size - 1).min(len - 1);
        self.scratch[left..=right].copy_from_slice(&data[left..=right]);
        self.cursor = Some(MergeCursor {
            left,
            mid,
            right,
            i: left,
            j: mid + 1,
            k: left,
        });
        StepOutcome::bookkeeping()
    }

    pub(super) fn highlights(&self) -> Highlights {
        let written = self
            .cursor
            .and_then(|cur| (cur.k > cur.left).then(|| cur.k - 1));
        Highlights {
            written,
            ..Highlights::default()
        }
    }
}
