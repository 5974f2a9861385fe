#![forbid(unsafe_code)]

//! stepsort-demo binary entry point.

use std::time::{SystemTime, UNIX_EPOCH};

use stepsort_core::config::EngineConfig;
use stepsort_demo::{app, cli, logging};

fn main() {
    let opts = cli::Opts::parse();

    if let Some(path) = &opts.log_file {
        if let Err(e) = logging::init(path) {
            eprintln!("Failed to open log file {}: {e}", path.display());
            std::process::exit(1);
        }
    }

    let seed = opts.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos() as u64)
    });
    let config = EngineConfig::default().with_len(opts.bars).with_seed(seed);
    tracing::debug!(seed, bars = opts.bars, "engine configured");

    if let Err(e) = app::run(&opts, config) {
        eprintln!("Runtime error: {e}");
        std::process::exit(1);
    }
}
