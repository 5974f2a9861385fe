#![forbid(unsafe_code)]

//! Engine configuration.

use std::fmt;
use std::ops::RangeInclusive;

/// Default number of bars.
pub const DEFAULT_LEN: usize = 150;
/// Smallest generated bar height.
pub const DEFAULT_MIN_VALUE: u32 = 5;
/// Largest generated bar height.
pub const DEFAULT_MAX_VALUE: u32 = 104;

/// Configuration for a [`SortController`](crate::controller::SortController).
///
/// # Example
///
/// ```
/// use stepsort_core::config::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_len(64)
///     .with_value_range(1, 50)
///     .with_seed(0xC0FFEE);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of elements generated on a fresh reset.
    pub len: usize,
    /// Inclusive lower bound of generated values. Must be non-zero.
    pub min_value: u32,
    /// Inclusive upper bound of generated values.
    pub max_value: u32,
    /// Seed for data generation and shuffling.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Set the number of elements.
    #[must_use]
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = len;
        self
    }

    /// Set the inclusive value range.
    #[must_use]
    pub fn with_value_range(mut self, min: u32, max: u32) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Set the PRNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The configured value range.
    #[must_use]
    pub fn value_range(&self) -> RangeInclusive<u32> {
        self.min_value..=self.max_value
    }

    /// Check the configuration for values the engine cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_value == 0 {
            return Err(ConfigError::ZeroValue);
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::EmptyRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }
}

/// Rejected engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// `min_value > max_value`.
    EmptyRange { min: u32, max: u32 },
    /// `min_value == 0`; zero is reserved for silence in the mailbox.
    ZeroValue,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRange { min, max } => {
                write!(f, "empty value range: min {min} is greater than max {max}")
            }
            Self::ZeroValue => f.write_str("minimum value must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
