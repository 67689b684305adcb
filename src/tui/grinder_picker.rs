//! Grinder picker popup.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::GrinderId;

use super::component::{centered_rect, Component, ComponentEvent};
use super::Theme;

/// List of the supported grinders with the current one preselected.
#[derive(Debug, Clone)]
pub struct GrinderPicker {
    selected: usize,
    current: GrinderId,
}

impl GrinderPicker {
    /// Opens the picker on `current`.
    #[must_use]
    pub fn new(current: GrinderId) -> Self {
        Self {
            selected: current.index(),
            current,
        }
    }

    /// Grinder under the cursor.
    #[must_use]
    pub fn highlighted(&self) -> GrinderId {
        GrinderId::ALL[self.selected % GrinderId::ALL.len()]
    }

    fn select_previous(&mut self) {
        let count = GrinderId::ALL.len();
        self.selected = (self.selected + count - 1) % count;
    }

    fn select_next(&mut self) {
        self.selected = (self.selected + 1) % GrinderId::ALL.len();
    }
}

impl Component for GrinderPicker {
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(ComponentEvent::GrinderSelected(self.highlighted()))
            }
            KeyCode::Esc | KeyCode::Char('q') => Some(ComponentEvent::Cancelled),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let area = centered_rect(50, 40, area);
        f.render_widget(Clear, area);
        f.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let items: Vec<ListItem> = GrinderId::ALL
            .iter()
            .map(|grinder| {
                let marker = if *grinder == self.current { " (current)" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(grinder.name(), Style::default().fg(theme.text)),
                    Span::styled(marker, Style::default().fg(theme.text_muted)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Select Grinder ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .highlight_style(
                Style::default()
                    .bg(theme.highlight_bg)
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol(">> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.selected));
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        let help = Paragraph::new("^|v: Navigate | Enter: Select | Esc: Cancel")
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text_muted));
        f.render_widget(help, chunks[1]);
    }
}
