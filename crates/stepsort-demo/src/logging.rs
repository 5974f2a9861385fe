#![forbid(unsafe_code)]

//! Tracing subscriber setup.
//!
//! The terminal belongs to the renderer, so log output only ever goes to a
//! file. Without `--log-file` no subscriber is installed and every event is
//! dropped.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "STEPSORT_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install a global fmt subscriber writing to `path`.
///
/// The filter comes from `STEPSORT_LOG` and defaults to `info`.
pub fn init(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(io::Error::other)
}
