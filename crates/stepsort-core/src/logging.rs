#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Re-exports the `tracing` macros the engine uses when the `tracing` feature
//! is enabled. Without the feature the same macro names expand to nothing, so
//! call sites never need their own `cfg` guards.

#[cfg(feature = "tracing")]
pub use tracing::{debug, info, trace};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op info macro when tracing is disabled.
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }
}
