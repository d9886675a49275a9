//! Event handling for the interactive maze view.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::App;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events with a timeout so the view keeps redrawing, for
/// instance after a terminal resize, even when no key is pressed.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    Ok(())
}

/// Applies a single key press to the application state.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    if matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
        app.exit = true;
    }
}
