//! Brew timer panel: countdown gauge, step list and the method tip.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::brew::{format_clock, BrewTimer};

use super::{panel_block, AppState, Focus, Theme};

/// Brew timer widget
pub struct BrewPanel;

impl BrewPanel {
    /// Render the timer for the selected profile.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let block = panel_block(" Brew ", state.focus == Focus::Brew, theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        if state.session.selected_profile().is_none() {
            let idle = Paragraph::new(Span::styled(
                "Timer unlocks after the wheel chooses a profile.",
                Style::default().fg(theme.text_muted),
            ));
            f.render_widget(idle, inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // status line
                Constraint::Length(1), // gauge
                Constraint::Min(3),    // steps
                Constraint::Length(2), // tip
            ])
            .split(inner);

        let timer = state.session.timer();
        f.render_widget(Paragraph::new(status_line(timer, theme)), chunks[0]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(theme.success).bg(theme.surface))
            .percent(percent(timer))
            .label(timer.display());
        f.render_widget(gauge, chunks[1]);

        let active = state.session.active_step_index();
        let items: Vec<ListItem> = state
            .session
            .steps()
            .iter()
            .map(|step| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{:<10}", step.name),
                        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{:>5}  ", format_clock(step.duration)),
                        Style::default().fg(theme.text_secondary),
                    ),
                    Span::styled(step.instruction, Style::default().fg(theme.text_muted)),
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
        list_state.select(active);
        f.render_stateful_widget(list, chunks[2], &mut list_state);

        if let Some(tip) = state.session.tip() {
            let tip = Paragraph::new(Line::from(vec![
                Span::styled("Tip: ", Style::default().fg(theme.warning)),
                Span::styled(tip, Style::default().fg(theme.text_secondary)),
            ]))
            .wrap(Wrap { trim: true });
            f.render_widget(tip, chunks[3]);
        }
    }
}

fn status_line(timer: &BrewTimer, theme: &Theme) -> Line<'static> {
    let (text, color) = if timer.is_finished() {
        ("Done", theme.success)
    } else if timer.is_running() {
        ("Brewing", theme.active)
    } else if timer.elapsed() > 0 {
        ("Paused", theme.warning)
    } else {
        ("Ready", theme.text_secondary)
    };

    Line::from(vec![
        Span::styled(text, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::styled(
            format!(
                "   {} of {}   s: start/pause  r: reset",
                timer.display(),
                format_clock(timer.total())
            ),
            Style::default().fg(theme.text_muted),
        ),
    ])
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(timer: &BrewTimer) -> u16 {
    timer.progress_percent().round().clamp(0.0, 100.0) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_is_bounded() {
        let mut timer = BrewTimer::new(3);
        assert_eq!(percent(&timer), 0);
        timer.start();
        timer.tick();
        assert_eq!(percent(&timer), 33);
        timer.tick();
        timer.tick();
        assert_eq!(percent(&timer), 100);
    }

    #[test]
    fn test_status_line_labels() {
        let theme = Theme::dark();
        let mut timer = BrewTimer::new(60);
        assert!(status_line(&timer, &theme).to_string().starts_with("Ready"));
        timer.start();
        assert!(status_line(&timer, &theme).to_string().starts_with("Brewing"));
        timer.tick();
        timer.pause();
        assert!(status_line(&timer, &theme).to_string().starts_with("Paused"));
    }
}
