//! Terminal User Interface (TUI) for studyflow.
//!
//! The focus timer screen. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, AppSettings};

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::core::Clock;
use crate::error::StudyError;
use crate::storage::ProgressStore;
use crate::tui::event::Action;

/// Longest wait between redraws while idle.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run<S: ProgressStore, C: Clock>(mut app: App<S, C>) -> Result<(), StudyError> {
    enable_raw_mode().map_err(|e| StudyError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| StudyError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| StudyError::Config(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B, S, C>(terminal: &mut Terminal<B>, app: &mut App<S, C>) -> Result<(), StudyError>
where
    B: Backend + Write,
    S: ProgressStore,
    C: Clock,
{
    while !app.should_quit {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| StudyError::Config(format!("Failed to draw: {e}")))?;

        let timeout = app
            .driver
            .time_until_next_tick()
            .map_or(IDLE_POLL, |d| d.min(IDLE_POLL));

        if let Some(action) = event::handle_events(timeout)? {
            match action {
                Action::Quit => app.quit(),
                Action::Toggle => app.toggle_timer(),
                Action::Reset => app.reset_timer(),
                Action::AdjustFocus(delta) => app.adjust_focus(delta),
                Action::AdjustBreak(delta) => app.adjust_break(delta),
                Action::Music => app.toggle_music(),
                Action::NextTrack => app.next_track(),
                Action::Help => app.status = Some(event::HELP.to_string()),
            }
        }

        app.on_tick();

        if app.take_bell() {
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            Write::flush(backend)?;
        }
    }

    Ok(())
}
