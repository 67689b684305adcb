//! Input handlers for the main view and popups.
//!
//! Every handler returns `Ok(true)` when the application should quit.

pub mod actions;
pub mod main;
pub mod popups;

use anyhow::Result;
use crossterm::event::KeyEvent;

use crate::tui::AppState;

pub use actions::dispatch_action;
pub use main::handle_main_input;
pub use popups::handle_popup_input;

/// Route a key press to the active popup, or to the main view.
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) -> Result<bool> {
    if state.active_popup.is_some() {
        handle_popup_input(state, key)
    } else {
        handle_main_input(state, key)
    }
}
