//! Method wheel panel.
//!
//! Segments are drawn as a list in wheel order; the row under the pointer is
//! highlighted and follows the eased rotation while a spin runs.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, ListState},
    Frame,
};

use crate::wheel::{geometry::FULL_TURN, WheelState};

use super::{panel_block, AppState, Focus};

/// Wheel widget
pub struct WheelPanel;

impl WheelPanel {
    /// Render the wheel into `area`.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let wheel = state.session.wheel();
        let now = state.now;

        let title = match wheel.state() {
            WheelState::Idle => " Wheel - Space to spin ",
            WheelState::Spinning { .. } => " Wheel - spinning... ",
            WheelState::Settled { .. } => " Wheel - Space to spin again ",
        };
        let block = panel_block(title, state.focus == Focus::Wheel, theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(inner);

        let settled = wheel.winner();
        let items: Vec<ListItem> = state
            .session
            .catalog()
            .profiles()
            .iter()
            .enumerate()
            .map(|(idx, profile)| {
                let marker = if settled == Some(idx) { "* " } else { "  " };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, Style::default().fg(theme.success)),
                    Span::styled(profile.region.as_str(), Style::default().fg(theme.text)),
                    Span::styled(
                        format!("  {}", profile.brew_method),
                        Style::default().fg(theme.text_muted),
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(Some(wheel.pointer_segment(now)));
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        let rotation = wheel.rotation_at(now).rem_euclid(FULL_TURN);
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.primary).bg(theme.surface))
            .ratio(wheel.progress(now).clamp(0.0, 1.0))
            .label(format!("{rotation:.0}\u{b0}"));
        f.render_widget(gauge, chunks[1]);
    }
}
