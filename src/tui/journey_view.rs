//! Coffee journey panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::{panel_block, AppState, Focus};

/// Journey widget
pub struct JourneyPanel;

impl JourneyPanel {
    /// Render the bean-to-cup stages; scrolls with j/k when focused.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let block = panel_block(" Journey ", state.focus == Focus::Journey, theme);

        let stages = state.session.journey();
        if stages.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "The journey appears once the wheel has chosen.",
                Style::default().fg(theme.text_muted),
            ))
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let mut lines = Vec::with_capacity(stages.len() * 3);
        for (idx, stage) in stages.into_iter().enumerate() {
            if idx > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!("{}. {}", idx + 1, stage.title),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                stage.description,
                Style::default().fg(theme.text),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((state.journey_scroll, 0));
        f.render_widget(paragraph, area);
    }
}
