#![forbid(unsafe_code)]

//! Single-slot sonification mailbox.
//!
//! The controller publishes the most recently touched value once per tick; an
//! audio producer on another thread polls it at its own rate. Last write wins,
//! there is no queue, and each load/store is atomic on its own. No ordering
//! with respect to other memory is implied, so `Relaxed` is sufficient.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// Value meaning "nothing is sounding".
pub const SILENCE: u32 = 0;

/// Base pitch in Hz for a value of zero height.
pub const TONE_BASE_HZ: f64 = 200.0;
/// Pitch increase in Hz per unit of value.
pub const TONE_HZ_PER_UNIT: f64 = 8.0;

/// Shared handle to the slot. Cloning yields another handle to the same slot.
#[derive(Debug, Clone, Default)]
pub struct SonificationMailbox {
    slot: Arc<AtomicU32>,
}

impl SonificationMailbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the slot.
    pub fn publish(&self, value: u32) {
        self.slot.store(value, Ordering::Relaxed);
    }

    /// Most recently published value; [`SILENCE`] if nothing is sounding.
    #[must_use]
    pub fn latest(&self) -> u32 {
        self.slot.load(Ordering::Relaxed)
    }
}

/// Pitch for a published value, or `None` for silence.
#[must_use]
pub fn tone_frequency(value: u32) -> Option<f64> {
    if value == SILENCE {
        None
    } else {
        Some(TONE_BASE_HZ + f64::from(value) * TONE_HZ_PER_UNIT)
    }
}
