//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::StudyError;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the timer.
    Toggle,
    /// Reset to a fresh focus phase.
    Reset,
    /// Change the focus length by this many minutes.
    AdjustFocus(i32),
    /// Change the break length by this many minutes.
    AdjustBreak(i32),
    /// Play or pause music.
    Music,
    /// Load the next music preset.
    NextTrack,
    /// Show key help.
    Help,
}

pub const HELP: &str =
    "space:start/pause | r:reset | +/-:focus | ]/[:break | m:music | n:next track | q:quit";

/// Map a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('+' | '=') => Some(Action::AdjustFocus(1)),
        KeyCode::Char('-' | '_') => Some(Action::AdjustFocus(-1)),
        KeyCode::Char(']') => Some(Action::AdjustBreak(1)),
        KeyCode::Char('[') => Some(Action::AdjustBreak(-1)),
        KeyCode::Char('m') => Some(Action::Music),
        KeyCode::Char('n') => Some(Action::NextTrack),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}

/// Wait up to `timeout` for a key press.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(timeout: Duration) -> Result<Option<Action>, StudyError> {
    if event::poll(timeout).map_err(|e| StudyError::Config(format!("Event poll failed: {e}")))? {
        if let Event::Key(key) =
            event::read().map_err(|e| StudyError::Config(format!("Event read failed: {e}")))?
        {
            return Ok(action_for_key(key));
        }
    }

    Ok(None)
}
