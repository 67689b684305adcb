//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, PopupType, Theme};

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let message = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::styled(error.as_str(), Style::default().fg(theme.text)),
            ])
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.text),
            ))
        };

        let status = Paragraph::new(vec![message, Self::help_line(state, theme)]).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary))
                .style(Style::default().bg(theme.background)),
        );
        f.render_widget(status, area);
    }

    fn help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let hints: &[(&str, &str)] = match state.active_popup {
            Some(PopupType::HelpOverlay) => &[("j/k", "Scroll"), ("Esc", "Close")],
            Some(PopupType::GrinderPicker) => {
                &[("j/k", "Navigate"), ("Enter", "Select"), ("Esc", "Cancel")]
            }
            None => &[
                ("Space", "Spin"),
                ("g", "Grinder"),
                ("s", "Timer"),
                ("y", "Copy"),
                ("Tab", "Focus"),
                ("?", "Help"),
                ("q", "Quit"),
            ],
        };

        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (idx, (key, label)) in hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" | ", Style::default().fg(theme.text_muted)));
            }
            spans.push(Span::styled(*key, Style::default().fg(theme.success)));
            spans.push(Span::styled(format!(": {label}"), Style::default().fg(theme.text_muted)));
        }
        Line::from(spans)
    }
}
