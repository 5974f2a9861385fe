#![forbid(unsafe_code)]

//! The driver loop.
//!
//! Each iteration drains pending input, advances the engine by exactly one
//! tick, redraws at most once per frame interval and then sleeps for the
//! pacing delay. Keeping the engine single-stepped means a key press is
//! noticed between any two comparisons, however slow the pacing.

use std::io::{self, BufWriter, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::Event;
use stepsort_core::algorithm::AlgorithmKind;
use stepsort_core::config::{ConfigError, EngineConfig};
use stepsort_core::controller::SortController;
use stepsort_core::mailbox::tone_frequency;

use crate::cli::Opts;
use crate::input::{Command, command_for};
use crate::pacing::Pacer;
use crate::render;
use crate::terminal::TerminalSession;

/// Minimum time between two redraws.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Engine plus pacing state, independent of the terminal.
#[derive(Debug)]
pub struct App {
    controller: SortController,
    pacer: Pacer,
}

impl App {
    /// Build the engine and start by shuffling the generated data for `kind`.
    pub fn new(
        config: EngineConfig,
        kind: AlgorithmKind,
        delay: Duration,
    ) -> Result<Self, ConfigError> {
        let mut controller = SortController::new(config)?;
        controller.reset(kind, false);
        Ok(Self {
            controller,
            pacer: Pacer::new(delay),
        })
    }

    #[must_use]
    pub fn controller(&self) -> &SortController {
        &self.controller
    }

    #[must_use]
    pub fn pacer(&self) -> Pacer {
        self.pacer
    }

    /// Apply a user command. Returns `false` when the app should quit.
    pub fn apply(&mut self, command: Command) -> bool {
        tracing::debug!(?command, "command");
        match command {
            Command::Select(kind) => self.controller.reset(kind, true),
            Command::Reshuffle => {
                let kind = self.controller.kind();
                self.controller.reset(kind, false);
            }
            Command::Faster => self.pacer.faster(),
            Command::Slower => self.pacer.slower(),
            Command::Quit => return false,
        }
        true
    }

    /// Advance one tick and return how long to wait before the next.
    pub fn tick(&mut self) -> Duration {
        let pacer = self.pacer;
        let snapshot = self.controller.tick();
        pacer.pause_after(&snapshot)
    }

    /// Draw the current state as a full frame.
    pub fn draw<W: Write>(&self, out: &mut W, size: (u16, u16)) -> io::Result<()> {
        let snapshot = self.controller.snapshot();
        let tone = tone_frequency(self.controller.latest_sonification_value());
        let hud = render::hud_lines(&snapshot, self.pacer.delay(), tone);
        render::draw(
            out,
            &snapshot,
            &hud,
            self.controller.config().max_value,
            size,
        )
    }
}

/// Run the interactive visualizer until the user quits or `exit_after_ms`
/// elapses.
pub fn run(opts: &Opts, config: EngineConfig) -> io::Result<()> {
    let mut app = App::new(config, opts.algorithm, Duration::from_millis(opts.delay_ms))
        .map_err(io::Error::other)?;
    let exit_after = (opts.exit_after_ms > 0).then(|| Duration::from_millis(opts.exit_after_ms));

    let session = TerminalSession::enter()?;
    let mut out = BufWriter::new(io::stdout());
    let mut size = session.size()?;
    let started = Instant::now();
    let mut last_frame: Option<Instant> = None;
    tracing::info!(
        algorithm = opts.algorithm.name(),
        bars = opts.bars,
        width = size.0,
        height = size.1,
        "visualizer started"
    );

    loop {
        while let Some(event) = session.poll_event(Duration::ZERO)? {
            match event {
                Event::Key(key) => {
                    let Some(command) = command_for(&key) else {
                        continue;
                    };
                    if !app.apply(command) {
                        tracing::info!("quit requested");
                        return Ok(());
                    }
                }
                Event::Resize(width, height) => {
                    size = (width, height);
                    session.clear()?;
                    last_frame = None;
                }
                _ => {}
            }
        }

        if exit_after.is_some_and(|limit| started.elapsed() >= limit) {
            tracing::info!("exit-after deadline reached");
            return Ok(());
        }

        let pause = app.tick();
        if last_frame.is_none_or(|at| at.elapsed() >= FRAME_INTERVAL) {
            app.draw(&mut out, size)?;
            last_frame = Some(Instant::now());
        }

        // Nothing left to step: idle at frame rate instead of spinning.
        let pause = if pause.is_zero() && app.controller().is_sorted() {
            FRAME_INTERVAL
        } else {
            pause
        };
        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }
}
