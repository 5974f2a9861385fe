#![forbid(unsafe_code)]

//! RAII terminal session.
//!
//! Entering the session switches to raw mode, the alternate screen and a
//! hidden cursor. All of it is undone when the session drops, including
//! during panic unwinding. A panic hook restores the terminal before the
//! panic message prints so it stays readable.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use crossterm::event::Event;

/// Owns raw mode and the alternate screen for its lifetime.
#[derive(Debug)]
pub struct TerminalSession {
    alternate_screen_enabled: bool,
}

impl TerminalSession {
    /// Enter raw mode, the alternate screen and hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode cannot be enabled or the escape
    /// sequences cannot be written.
    pub fn enter() -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        tracing::info!("terminal raw mode enabled");

        // Dropping on the error paths below still restores raw mode.
        let mut session = Self {
            alternate_screen_enabled: false,
        };

        let mut stdout = io::stdout();
        crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
        session.alternate_screen_enabled = true;
        crossterm::execute!(
            stdout,
            crossterm::cursor::Hide,
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
        )?;
        Ok(session)
    }

    /// Current terminal size (columns, rows).
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    /// Next pending event, waiting at most `timeout`.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<Option<Event>> {
        if crossterm::event::poll(timeout)? {
            crossterm::event::read().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Clear the whole screen, e.g. after a resize.
    pub fn clear(&self) -> io::Result<()> {
        crossterm::execute!(
            io::stdout(),
            crossterm::terminal::Clear(crossterm::terminal::ClearType::All)
        )
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();
        let _ = crossterm::execute!(
            stdout,
            crossterm::style::ResetColor,
            crossterm::cursor::Show
        );

        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }

        let _ = crossterm::terminal::disable_raw_mode();
        tracing::info!("terminal raw mode disabled");
        let _ = stdout.flush();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = crossterm::execute!(stdout, crossterm::style::ResetColor);
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}
