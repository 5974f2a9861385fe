#![forbid(unsafe_code)]

//! Resumable single-step sorting state machines.
//!
//! Every algorithm keeps all of its loop variables in an explicit state value
//! and advances by exactly one elementary operation per [`AlgorithmState::step`]
//! call: one comparison, plus at most one swap or write. Nothing recurses and
//! nothing blocks, so a driver can step at any pace, including not at all.
//!
//! Quick sort keeps its pending ranges on an explicit stack and merge sort
//! walks run sizes bottom-up; recursion would make a single step impossible
//! to resume.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use std::ops::Range;

use crate::algorithm::AlgorithmKind;

pub use bubble::BubbleState;
pub use insertion::InsertionState;
pub use merge::{MergeCursor, MergeState};
pub use quick::{Partition, QuickState};
pub use selection::SelectionState;

/// What a single step did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Comparisons performed (0 or 1).
    pub comparisons: u8,
    /// Swaps or writes performed (0 or 1).
    pub swaps: u8,
    /// Value to sonify for this step; `None` means silence.
    pub tone: Option<u32>,
    /// The algorithm has finished; the data is sorted.
    pub finished: bool,
}

impl StepOutcome {
    /// A step that compared one pair and touched `tone`.
    pub(crate) const fn compared(tone: u32) -> Self {
        Self {
            comparisons: 1,
            swaps: 0,
            tone: Some(tone),
            finished: false,
        }
    }

    /// A bookkeeping step with no comparison (range pop, pass change).
    pub(crate) const fn bookkeeping() -> Self {
        Self {
            comparisons: 0,
            swaps: 0,
            tone: None,
            finished: false,
        }
    }

    /// Completion signal.
    pub(crate) const fn finished() -> Self {
        Self {
            comparisons: 0,
            swaps: 0,
            tone: None,
            finished: true,
        }
    }
}

/// Indices a renderer should emphasise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlights {
    /// Indices under comparison or under the cursor.
    pub active: Vec<usize>,
    /// Reference index: the running minimum or the pivot.
    pub marker: Option<usize>,
    /// Slot most recently written by a merge.
    pub written: Option<usize>,
    /// Region already in its final position.
    pub settled: Range<usize>,
}

/// Resumable progress of the active algorithm.
///
/// Only the variant matching the run's [`AlgorithmKind`] ever exists, so state
/// from a previous algorithm cannot leak into the next run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlgorithmState {
    Bubble(BubbleState),
    Selection(SelectionState),
    Insertion(InsertionState),
    Quick(QuickState),
    Merge(MergeState),
}

impl AlgorithmState {
    /// Fresh state for sorting `data` with `kind`.
    #[must_use]
    pub fn new(kind: AlgorithmKind, data: &[u32]) -> Self {
        match kind {
            AlgorithmKind::BubbleSort => Self::Bubble(BubbleState::new()),
            AlgorithmKind::SelectionSort => Self::Selection(SelectionState::new()),
            AlgorithmKind::InsertionSort => Self::Insertion(InsertionState::new()),
            AlgorithmKind::QuickSort => Self::Quick(QuickState::new(data.len())),
            AlgorithmKind::MergeSort => Self::Merge(MergeState::new(data)),
        }
    }

    /// Which algorithm this state belongs to.
    #[must_use]
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Self::Bubble(_) => AlgorithmKind::BubbleSort,
            Self::Selection(_) => AlgorithmKind::SelectionSort,
            Self::Insertion(_) => AlgorithmKind::InsertionSort,
            Self::Quick(_) => AlgorithmKind::QuickSort,
            Self::Merge(_) => AlgorithmKind::MergeSort,
        }
    }

    /// Perform one elementary operation on `data`.
    ///
    /// Once a step has reported `finished`, further calls keep reporting it
    /// without touching `data`.
    pub fn step(&mut self, data: &mut [u32]) -> StepOutcome {
        match self {
            Self::Bubble(s) => s.step(data),
            Self::Selection(s) => s.step(data),
            Self::Insertion(s) => s.step(data),
            Self::Quick(s) => s.step(data),
            Self::Merge(s) => s.step(data),
        }
    }

    /// The monotonically advancing outer index, for algorithms that have one.
    #[must_use]
    pub fn outer_index(&self) -> Option<usize> {
        match self {
            Self::Bubble(s) => Some(s.pass()),
            Self::Selection(s) => Some(s.outer()),
            Self::Insertion(s) => Some(s.outer()),
            Self::Quick(_) | Self::Merge(_) => None,
        }
    }

    /// Whether a merge is currently copying values back into the data.
    #[must_use]
    pub fn is_merging(&self) -> bool {
        matches!(self, Self::Merge(s) if s.cursor().is_some())
    }

    /// Indices to emphasise for the current position, given `len` elements.
    #[must_use]
    pub fn highlights(&self, len: usize) -> Highlights {
        match self {
            Self::Bubble(s) => s.highlights(len),
            Self::Selection(s) => s.highlights(len),
            Self::Insertion(s) => s.highlights(len),
            Self::Quick(s) => s.highlights(),
            Self::Merge(s) => s.highlights(),
        }
    }
}
