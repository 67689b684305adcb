//! Popup input handlers.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::tui::{ActiveComponent, AppState, Component, ComponentEvent, PopupType};

/// Route input to whichever popup is open.
pub fn handle_popup_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match state.active_popup {
        Some(PopupType::HelpOverlay) => handle_help_overlay_input(state, key),
        Some(PopupType::GrinderPicker) => handle_grinder_picker_input(state, key),
        None => Ok(false),
    }
}

/// Handle input for help overlay
pub fn handle_help_overlay_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?' | 'q') => {
            state.close_popup();
        }
        KeyCode::Up | KeyCode::Char('k') => state.help_overlay_state.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => state.help_overlay_state.scroll_down(),
        KeyCode::Home => state.help_overlay_state.scroll_to_top(),
        KeyCode::End => state.help_overlay_state.scroll_to_bottom(),
        _ => {}
    }
    Ok(false)
}

/// Handle input for the grinder picker component
pub fn handle_grinder_picker_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let Some(ActiveComponent::GrinderPicker(picker)) = state.active_component.as_mut() else {
        state.close_popup();
        return Ok(false);
    };

    match picker.handle_input(key) {
        Some(ComponentEvent::GrinderSelected(grinder)) => {
            state.session.set_grinder(grinder);
            state.close_popup();
            state.set_status(format!("Grinder: {}", grinder.name()));
        }
        Some(ComponentEvent::Cancelled | ComponentEvent::Closed) => {
            state.close_popup();
            state.set_status("Grinder unchanged");
        }
        None => {}
    }
    Ok(false)
}
