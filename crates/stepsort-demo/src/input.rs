#![forbid(unsafe_code)]

//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use stepsort_core::algorithm::AlgorithmKind;

/// A discrete user command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start `kind` on freshly generated data.
    Select(AlgorithmKind),
    /// Shuffle the current data in place and sort it again.
    Reshuffle,
    /// Decrease the per-step delay.
    Faster,
    /// Increase the per-step delay.
    Slower,
    Quit,
}

/// Map a key event to a command. Releases and unbound keys map to `None`.
#[must_use]
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    // Arrow keys auto-repeat; everything else only fires on press.
    let repeat = key.kind == KeyEventKind::Repeat;

    match key.code {
        KeyCode::Up => Some(Command::Faster),
        KeyCode::Down => Some(Command::Slower),
        _ if repeat => None,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('r' | 'R') => Some(Command::Reshuffle),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(AlgorithmKind::from_number)
            .map(Command::Select),
        _ => None,
    }
}
