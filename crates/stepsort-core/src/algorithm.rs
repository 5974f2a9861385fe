#![forbid(unsafe_code)]

//! The set of sorting algorithms the engine can step through.

use std::fmt;

/// Which sorting algorithm a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlgorithmKind {
    #[default]
    BubbleSort,
    SelectionSort,
    InsertionSort,
    QuickSort,
    MergeSort,
}

impl AlgorithmKind {
    /// All algorithms, in key-binding order (`1`..=`5`).
    pub const ALL: [AlgorithmKind; 5] = [
        Self::BubbleSort,
        Self::SelectionSort,
        Self::InsertionSort,
        Self::QuickSort,
        Self::MergeSort,
    ];

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BubbleSort => "Bubble Sort",
            Self::SelectionSort => "Selection Sort",
            Self::InsertionSort => "Insertion Sort",
            Self::QuickSort => "Quick Sort",
            Self::MergeSort => "Merge Sort",
        }
    }

    /// Short complexity summary shown next to the name.
    #[must_use]
    pub const fn complexity(self) -> &'static str {
        match self {
            Self::BubbleSort | Self::SelectionSort => "O(N^2) - Slow",
            Self::InsertionSort => "O(N^2) - OK for small lists",
            Self::QuickSort => "O(N log N) - Fast",
            Self::MergeSort => "O(N log N) - Stable",
        }
    }

    /// One-line explanation of how the algorithm works.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::BubbleSort => "Swaps adjacent elements repeatedly.",
            Self::SelectionSort => "Finds the smallest item and moves it.",
            Self::InsertionSort => "Builds sorted array one item at a time.",
            Self::QuickSort => "Divides list around a pivot point.",
            Self::MergeSort => "Divides list in half, sorts, and merges.",
        }
    }

    /// 1-based position in [`Self::ALL`].
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::BubbleSort => 1,
            Self::SelectionSort => 2,
            Self::InsertionSort => 3,
            Self::QuickSort => 4,
            Self::MergeSort => 5,
        }
    }

    /// Look up an algorithm by its 1-based number.
    #[must_use]
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// Whether progress is measured by a single advancing outer index.
    ///
    /// Divide-and-conquer algorithms have no such index and fall back to the
    /// sorted-adjacent-pairs heuristic.
    #[must_use]
    pub const fn has_outer_index(self) -> bool {
        matches!(
            self,
            Self::BubbleSort | Self::SelectionSort | Self::InsertionSort
        )
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
