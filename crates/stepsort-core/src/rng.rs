#![forbid(unsafe_code)]

//! Small deterministic PRNG for data generation and shuffling.
//!
//! Quality only needs to be good enough to make the bars look random; what
//! matters more is that a given seed always reproduces the same run.

use std::ops::RangeInclusive;

/// 64-bit LCG (Knuth MMIX constants).
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Low bits of an LCG are weak; fold the high half in.
        self.state ^ (self.state >> 32)
    }

    /// Uniform-ish index in `0..bound`. Returns 0 when `bound` is 0.
    pub fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as usize
    }

    /// Value in the inclusive range. Returns the start for an empty range.
    pub fn next_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (lo, hi) = (*range.start(), *range.end());
        if hi <= lo {
            return lo;
        }
        let span = u64::from(hi - lo) + 1;
        lo + (self.next_u64() % span) as u32
    }
}
