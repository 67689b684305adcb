//! Action dispatch for the main view.

use anyhow::Result;
use std::time::Instant;

use crate::share::{copy_to_clipboard, share_text, share_url};
use crate::shortcuts::Action;
use crate::tui::{AppState, Focus, PopupType};

/// Upper bound for panel scroll offsets.
const MAX_SCROLL: u16 = 64;

/// Execute `action`. Returns `Ok(true)` to quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        Action::Spin => handle_spin(state),
        Action::CycleGrinder => {
            let grinder = state.session.cycle_grinder();
            state.set_status(format!("Grinder: {}", grinder.name()));
        }
        Action::OpenGrinderPicker => state.open_grinder_picker(),
        Action::ToggleTimer => handle_toggle_timer(state),
        Action::ResetTimer => {
            if state.session.selected_profile().is_some() {
                state.session.reset_timer();
                state.set_status(format!("Timer reset to {}", state.session.timer().display()));
            } else {
                state.set_error("Spin the wheel first");
            }
        }
        Action::CopyRecipe => copy_share(state, ShareKind::Recipe),
        Action::CopyLink => copy_share(state, ShareKind::Link),
        Action::FocusNext => state.focus = state.focus.next(),
        Action::FocusPrevious => state.focus = state.focus.previous(),
        Action::ScrollDown => scroll(state, true),
        Action::ScrollUp => scroll(state, false),
        Action::ToggleHelp => {
            state.help_overlay_state.scroll_to_top();
            state.active_popup = Some(PopupType::HelpOverlay);
        }
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
        Action::Cancel => state.clear_messages(),
    }
    Ok(false)
}

fn handle_spin(state: &mut AppState) {
    // The last tick may be a full poll interval old
    state.now = Instant::now();
    if state.session.spin(&mut state.rng, state.now).is_some() {
        state.focus = Focus::Wheel;
        state.set_status("Spinning...");
    } else {
        state.set_status("The wheel is already spinning");
    }
}

fn handle_toggle_timer(state: &mut AppState) {
    if state.session.selected_profile().is_none() {
        state.set_error("Spin the wheel first");
        return;
    }
    if state.session.timer().is_finished() {
        state.set_status("Brew finished. Press r to reset");
        return;
    }

    state.now = Instant::now();
    if state.session.toggle_timer(state.now) {
        state.set_status("Brewing...");
    } else {
        state.set_status(format!("Paused at {}", state.session.timer().display()));
    }
}

#[derive(Debug, Clone, Copy)]
enum ShareKind {
    Recipe,
    Link,
}

fn copy_share(state: &mut AppState, kind: ShareKind) {
    let grinder = state.session.grinder();
    let Some(profile) = state.session.selected_profile() else {
        state.set_error("Spin the wheel first");
        return;
    };

    let (text, done) = match kind {
        ShareKind::Recipe => (share_text(profile, grinder), "Recipe copied to clipboard"),
        ShareKind::Link => (
            share_url(&state.config.share.base_url, &profile.id, grinder),
            "Share link copied to clipboard",
        ),
    };

    match copy_to_clipboard(&text) {
        Ok(()) => state.set_status(done),
        Err(e) => {
            tracing::warn!("Clipboard unavailable: {e:#}");
            state.set_error(format!("Failed to copy to clipboard: {e}"));
        }
    }
}

fn scroll(state: &mut AppState, down: bool) {
    let offset = match state.focus {
        Focus::Profile => &mut state.profile_scroll,
        Focus::Journey => &mut state.journey_scroll,
        Focus::Wheel | Focus::Calibration | Focus::Brew => return,
    };
    *offset = if down {
        offset.saturating_add(1).min(MAX_SCROLL)
    } else {
        offset.saturating_sub(1)
    };
}
