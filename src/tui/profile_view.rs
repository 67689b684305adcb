//! Profile card and grinder calibration panels.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{LineGauge, Paragraph, Wrap},
    Frame,
};

use crate::brew::format_clock;

use super::{panel_block, AppState, Focus, Theme};

/// Profile card widget
pub struct ProfilePanel;

impl ProfilePanel {
    /// Render the selected profile, or a prompt to spin.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let block = panel_block(" Profile ", state.focus == Focus::Profile, theme);

        let Some(profile) = state.session.selected_profile() else {
            let prompt = Paragraph::new(Line::from(Span::styled(
                "Spin the wheel to discover today's coffee.",
                Style::default().fg(theme.text_muted),
            )))
            .block(block);
            f.render_widget(prompt, area);
            return;
        };

        let label =
            |text: &'static str| Span::styled(text, Style::default().fg(theme.text_secondary));
        let lines = vec![
            Line::from(Span::styled(
                profile.region.as_str(),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                label("Notes: "),
                Span::styled(profile.notes.join(" \u{b7} "), Style::default().fg(theme.accent)),
            ]),
            Line::from(vec![
                label("Roast: "),
                Span::styled(profile.roast_level.to_string(), Style::default().fg(theme.text)),
                label("   Method: "),
                Span::styled(profile.brew_method.label(), Style::default().fg(theme.text)),
                label("   Time: "),
                Span::styled(format_clock(profile.brew_time), Style::default().fg(theme.text)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                profile.story.as_str(),
                Style::default().fg(theme.text),
            )),
        ];

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((state.profile_scroll, 0));
        f.render_widget(paragraph, area);
    }
}

/// Grinder calibration widget
pub struct CalibrationPanel;

impl CalibrationPanel {
    /// Render the tick setting and dial for the selected grinder.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let block = panel_block(" Calibration ", state.focus == Focus::Calibration, theme);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let Some(calibration) = state.session.calibration() else {
            let text = Paragraph::new(vec![
                Line::from(vec![
                    Span::styled("Grinder: ", Style::default().fg(theme.text_secondary)),
                    Span::styled(state.session.grinder().name(), Style::default().fg(theme.text)),
                ]),
                Line::from(Span::styled(
                    "No profile selected yet.",
                    Style::default().fg(theme.text_muted),
                )),
            ]);
            f.render_widget(text, inner);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        let header = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("Grinder: ", Style::default().fg(theme.text_secondary)),
                Span::styled(calibration.grinder_name, Style::default().fg(theme.text)),
                Span::styled("  (g / G to change)", Style::default().fg(theme.text_muted)),
            ]),
            Line::from(vec![
                Span::styled("Setting: ", Style::default().fg(theme.text_secondary)),
                Span::styled(
                    format!("{} clicks", calibration.ticks),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
            ]),
        ]);
        f.render_widget(header, chunks[0]);

        let dial = dial_gauge(calibration.dial_angle(), calibration.dial_rotation(), theme);
        f.render_widget(dial, chunks[1]);

        let advice = Paragraph::new(Span::styled(
            calibration.advice(),
            Style::default().fg(theme.text_muted),
        ))
        .wrap(Wrap { trim: true });
        f.render_widget(advice, chunks[2]);
    }
}

fn dial_gauge(angle: u32, rotation: u32, theme: &Theme) -> LineGauge<'static> {
    LineGauge::default()
        .filled_style(Style::default().fg(theme.primary))
        .unfilled_style(Style::default().fg(theme.inactive))
        .label(format!("Dial {rotation}\u{b0}"))
        .ratio(f64::from(angle) / 360.0)
}
