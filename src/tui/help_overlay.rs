//! Help overlay listing every keyboard shortcut.
//!
//! Opened with '?', scrollable with j/k, closed with Esc or '?' again.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::branding::{APP_DISPLAY_NAME, APP_TAGLINE};
use crate::shortcuts::HELP_ENTRIES;

use super::component::centered_rect;
use super::Theme;

const KEY_COLUMN_WIDTH: usize = 16;

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scroll_offset: 0,
            total_lines: Self::help_content(&Theme::dark()).len(),
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }

    fn help_content(theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{APP_DISPLAY_NAME} - {APP_TAGLINE}"),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "═══ SHORTCUTS ═══",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (keys, action) in HELP_ENTRIES {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{keys:<KEY_COLUMN_WIDTH$}"),
                    Style::default().fg(theme.success),
                ),
                Span::styled(action.description(), Style::default().fg(theme.text)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Spin the wheel, dial in the grinder, then start the timer.",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }

    /// Render the overlay centred in `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(70, 80, area);
        f.render_widget(Clear, area);

        let content = Self::help_content(theme);
        let visible: Vec<Line> = content.into_iter().skip(self.scroll_offset).collect();

        let paragraph = Paragraph::new(visible)
            .block(
                Block::default()
                    .title(" Help - Esc or ? to close ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text));
        f.render_widget(paragraph, area);

        let mut scrollbar_state =
            ScrollbarState::new(self.total_lines).position(self.scroll_offset);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area,
            &mut scrollbar_state,
        );
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_lists_every_shortcut() {
        let content = HelpOverlayState::help_content(&Theme::dark());
        assert!(content.len() > HELP_ENTRIES.len());
        let text: Vec<String> = content.iter().map(ToString::to_string).collect();
        for (_, action) in HELP_ENTRIES {
            assert!(text.iter().any(|line| line.contains(action.description())));
        }
    }

    #[test]
    fn test_scroll_bounds() {
        let mut state = HelpOverlayState::new();
        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);
        state.scroll_to_bottom();
        let bottom = state.scroll_offset;
        state.scroll_down();
        assert_eq!(state.scroll_offset, bottom);
        state.scroll_to_top();
        assert_eq!(state.scroll_offset, 0);
    }
}
