//! Terminal user interface for Roastitect.
//!
//! This module implements the interactive session: the method wheel, the
//! profile card with grinder calibration, the coffee journey and the brew
//! timer, built on Ratatui.

pub mod brew_view;
pub mod component;
pub mod grinder_picker;
pub mod handlers;
pub mod help_overlay;
pub mod journey_view;
pub mod profile_view;
pub mod status_bar;
pub mod theme;
pub mod wheel_view;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io::{self, Write};
use std::time::{Duration, Instant};

use crate::branding::{APP_DISPLAY_NAME, APP_TAGLINE};
use crate::config::Config;
use crate::session::{Session, SessionEvent};
use crate::shortcuts::ShortcutRegistry;

pub use brew_view::BrewPanel;
pub use component::{Component, ComponentEvent};
pub use grinder_picker::GrinderPicker;
pub use help_overlay::HelpOverlayState;
pub use journey_view::JourneyPanel;
pub use profile_view::{CalibrationPanel, ProfilePanel};
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use wheel_view::WheelPanel;

use handlers::handle_key_event;

/// Poll timeout while nothing animates.
const IDLE_POLL: Duration = Duration::from_millis(100);
/// Poll timeout while the wheel spins (about 30 frames per second).
const FRAME_POLL: Duration = Duration::from_millis(33);

/// Panel that receives scroll keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The method wheel
    Wheel,
    /// Profile card
    Profile,
    /// Grinder calibration
    Calibration,
    /// Coffee journey
    Journey,
    /// Brew timer and steps
    Brew,
}

impl Focus {
    const ORDER: [Self; 5] = [
        Self::Wheel,
        Self::Profile,
        Self::Calibration,
        Self::Journey,
        Self::Brew,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    /// Next panel in tab order, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous panel in tab order, wrapping.
    #[must_use]
    pub fn previous(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Popup types that can be displayed over the main UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupType {
    /// Grinder selection list
    GrinderPicker,
    /// Keyboard shortcut reference
    HelpOverlay,
}

/// Active component instance (Component trait pattern).
#[derive(Debug)]
pub enum ActiveComponent {
    /// Grinder picker popup
    GrinderPicker(GrinderPicker),
}

/// Application state - single source of truth
///
/// All UI components read from this state. Only the session mutates brewing
/// state; the rest is presentation.
pub struct AppState {
    /// Wheel, selection and brew timer
    pub session: Session,
    /// User configuration
    pub config: Config,
    /// Active color theme
    pub theme: Theme,
    /// Randomness for spins
    pub rng: StdRng,
    /// Keyboard bindings
    pub shortcuts: ShortcutRegistry,
    /// Instant of the latest update; rendering reads animation state at this time
    pub now: Instant,
    /// Panel receiving scroll keys
    pub focus: Focus,
    /// Scroll offset of the profile card
    pub profile_scroll: u16,
    /// Scroll offset of the journey panel
    pub journey_scroll: u16,
    /// Status message shown in the status bar
    pub status_message: String,
    /// Error message, shown instead of the status when set
    pub error_message: Option<String>,
    /// Popup drawn over the main view
    pub active_popup: Option<PopupType>,
    /// Component backing the active popup, if it has one
    pub active_component: Option<ActiveComponent>,
    /// Help overlay scroll state
    pub help_overlay_state: HelpOverlayState,
    /// Set when the terminal bell should ring on the next frame
    pub bell_pending: bool,
    /// Set by the quit action
    pub should_quit: bool,
}

impl AppState {
    /// Creates the state. `seed` makes spins reproducible.
    #[must_use]
    pub fn new(session: Session, config: Config, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(
            || StdRng::from_rng(&mut rand::rng()),
            StdRng::seed_from_u64,
        );
        let focus = if session.selected_profile().is_some() {
            Focus::Profile
        } else {
            Focus::Wheel
        };

        Self {
            theme: Theme::from_mode(config.ui.theme_mode),
            session,
            config,
            rng,
            shortcuts: ShortcutRegistry::new(),
            now: Instant::now(),
            focus,
            profile_scroll: 0,
            journey_scroll: 0,
            status_message: "Press Space to spin the wheel, ? for help".to_string(),
            error_message: None,
            active_popup: None,
            active_component: None,
            help_overlay_state: HelpOverlayState::new(),
            bell_pending: false,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear status and error messages
    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message = None;
    }

    /// Advances the session to `now` and reacts to what happened.
    pub fn tick(&mut self, now: Instant) {
        self.now = now;
        for event in self.session.update(now) {
            self.handle_session_event(event);
        }
    }

    fn handle_session_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::ProfileSelected { profile_id } => {
                let label = self
                    .session
                    .catalog()
                    .get(&profile_id)
                    .map_or(profile_id.clone(), |p| p.region.clone());
                self.profile_scroll = 0;
                self.journey_scroll = 0;
                self.set_status(format!("The wheel chose {label}"));
            }
            SessionEvent::RevealResults => {
                self.focus = Focus::Profile;
            }
            SessionEvent::TimerFinished => {
                self.set_status("Brew complete. Enjoy your cup!");
                if self.config.timer.bell_on_finish {
                    self.bell_pending = true;
                }
            }
        }
    }

    /// Open the grinder picker on the current grinder
    pub fn open_grinder_picker(&mut self) {
        let picker = GrinderPicker::new(self.session.grinder());
        self.active_component = Some(ActiveComponent::GrinderPicker(picker));
        self.active_popup = Some(PopupType::GrinderPicker);
    }

    /// Close whichever popup is open
    pub fn close_popup(&mut self) {
        self.active_popup = None;
        self.active_component = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.tick(Instant::now());

        if std::mem::take(&mut state.bell_pending) {
            ring_bell(terminal.backend_mut())?;
        }

        terminal.draw(|f| render(f, state))?;

        let timeout = if state.session.wheel().is_spinning() {
            FRAME_POLL
        } else {
            IDLE_POLL
        };

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break;
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn ring_bell<W: Write>(out: &mut W) -> Result<()> {
    out.write_all(b"\x07").context("Failed to ring terminal bell")?;
    out.flush().context("Failed to flush terminal")?;
    Ok(())
}

/// Main render function
fn render(f: &mut Frame, state: &AppState) {
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    render_main_content(f, chunks[1], state);
    StatusBar::render(f, chunks[2], state, &state.theme);

    let area = f.area();
    match state.active_popup {
        Some(PopupType::HelpOverlay) => {
            state.help_overlay_state.render(f, area, &state.theme);
        }
        Some(PopupType::GrinderPicker) => {
            if let Some(ActiveComponent::GrinderPicker(picker)) = &state.active_component {
                picker.render(f, area, &state.theme);
            }
        }
        None => {}
    }
}

fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let title = Line::from(vec![
        Span::styled(
            APP_DISPLAY_NAME,
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" - {APP_TAGLINE}"), Style::default().fg(theme.text_secondary)),
        Span::styled("   Grinder: ", Style::default().fg(theme.text_muted)),
        Span::styled(state.session.grinder().name(), Style::default().fg(theme.accent)),
    ]);

    let paragraph = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(paragraph, area);
}

fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(columns[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(25),
            Constraint::Percentage(40),
        ])
        .split(columns[1]);

    WheelPanel::render(f, left[0], state);
    CalibrationPanel::render(f, left[1], state);
    ProfilePanel::render(f, right[0], state);
    JourneyPanel::render(f, right[1], state);
    BrewPanel::render(f, right[2], state);
}

/// Bordered panel block, highlighted when focused.
pub(crate) fn panel_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused { theme.active } else { theme.inactive };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.background))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::GrinderId;
    use crate::wheel::SpinTuning;

    fn app_state() -> AppState {
        let session = Session::new(
            Catalog::load().unwrap(),
            SpinTuning::default(),
            GrinderId::default(),
        );
        let mut config = Config::default();
        config.ui.theme_mode = crate::config::ThemeMode::Dark;
        AppState::new(session, config, Some(7))
    }

    #[test]
    fn test_focus_cycle() {
        let mut focus = Focus::Wheel;
        for _ in 0..Focus::ORDER.len() {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Wheel);
        assert_eq!(Focus::Wheel.previous(), Focus::Brew);
    }

    #[test]
    fn test_status_and_error() {
        let mut state = app_state();
        state.set_error("boom");
        assert_eq!(state.error_message.as_deref(), Some("boom"));
        state.set_status("fine");
        assert!(state.error_message.is_none());
        state.clear_messages();
        assert!(state.status_message.is_empty());
    }

    #[test]
    fn test_spin_settles_and_reveals() {
        let mut state = app_state();
        let start = Instant::now();
        assert!(state.session.spin(&mut state.rng, start).is_some());

        let tuning = SpinTuning::default();
        state.tick(start + tuning.spin_duration());
        assert!(state.session.selected_profile().is_some());
        assert!(state.status_message.starts_with("The wheel chose"));
        assert_eq!(state.focus, Focus::Wheel);

        state.tick(start + tuning.spin_duration() + tuning.reveal_delay());
        assert_eq!(state.focus, Focus::Profile);
    }

    #[test]
    fn test_timer_finish_requests_bell() {
        let mut state = app_state();
        state.session.select_profile("espresso").unwrap();
        let start = Instant::now();
        assert!(state.session.toggle_timer(start));

        let total = u64::from(state.session.timer().total());
        state.tick(start + Duration::from_secs(total));
        assert!(state.session.timer().is_finished());
        assert!(state.bell_pending);

        let mut sink = Vec::new();
        ring_bell(&mut sink).unwrap();
        assert_eq!(sink, b"\x07");
    }

    #[test]
    fn test_bell_can_be_disabled() {
        let mut state = app_state();
        state.config.timer.bell_on_finish = false;
        state.session.select_profile("espresso").unwrap();
        let start = Instant::now();
        state.session.toggle_timer(start);
        let total = u64::from(state.session.timer().total());
        state.tick(start + Duration::from_secs(total));
        assert!(!state.bell_pending);
        assert_eq!(state.status_message, "Brew complete. Enjoy your cup!");
    }
}
