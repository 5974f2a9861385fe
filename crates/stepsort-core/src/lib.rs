#![forbid(unsafe_code)]

//! Core: resumable single-step sorting engine.
//!
//! Each supported algorithm is expressed as a state machine that performs one
//! elementary operation (one comparison, at most one write or swap) per call.
//! The [`controller::SortController`] owns the data, drives shuffling and
//! stepping one tick at a time, and hands a [`controller::StepSnapshot`] back
//! to whatever is rendering it.
//!
//! # Example
//!
//! ```
//! use stepsort_core::algorithm::AlgorithmKind;
//! use stepsort_core::config::EngineConfig;
//! use stepsort_core::controller::SortController;
//!
//! let config = EngineConfig::default().with_len(32).with_seed(7);
//! let mut controller = SortController::new(config)?;
//! controller.reset(AlgorithmKind::QuickSort, true);
//!
//! while !controller.tick().sorted {}
//!
//! assert!(controller.data().windows(2).all(|w| w[0] <= w[1]));
//! # Ok::<(), stepsort_core::config::ConfigError>(())
//! ```

pub mod algorithm;
pub mod clock;
pub mod config;
pub mod controller;
pub mod logging;
pub mod mailbox;
pub mod metrics;
pub mod progress;
pub mod rng;
pub mod stepper;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace};
