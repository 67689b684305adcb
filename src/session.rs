//! Session controller.
//!
//! Owns everything the experience mutates: the wheel, the current selection,
//! the brew timer and its ticker. Both the TUI and tests drive it with explicit
//! instants so behaviour is deterministic.

use anyhow::Result;
use rand::Rng;
use std::time::Instant;

use crate::brew::{architect_tip, brew_steps, BrewStep, BrewTimer, SecondTicker, TimerEvent};
use crate::calibration::Calibration;
use crate::catalog::Catalog;
use crate::journey::{journey_stages, JourneyStage};
use crate::models::{CoffeeProfile, GrinderId};
use crate::wheel::{SpinPlan, SpinTuning, Wheel, WheelEvent};

/// Notable changes reported by [`Session::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The wheel settled and its winner became the selected profile
    ProfileSelected {
        /// Id of the newly selected profile
        profile_id: String,
    },
    /// Time to bring the results into view
    RevealResults,
    /// The brew countdown reached zero
    TimerFinished,
}

/// State of one Roastitect session.
#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    wheel: Wheel,
    selected: Option<usize>,
    grinder: GrinderId,
    timer: BrewTimer,
    ticker: SecondTicker,
    steps: Vec<BrewStep>,
}

impl Session {
    /// A fresh session: nothing selected, `grinder` chosen.
    #[must_use]
    pub fn new(catalog: Catalog, tuning: SpinTuning, grinder: GrinderId) -> Self {
        let wheel = Wheel::new(catalog.segment_count(), tuning);
        Self {
            catalog,
            wheel,
            selected: None,
            grinder,
            timer: BrewTimer::new(0),
            ticker: SecondTicker::new(),
            steps: Vec::new(),
        }
    }

    /// The profile catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The method wheel.
    #[must_use]
    pub const fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    /// Spins the wheel. `None` while a spin is already running.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> Option<SpinPlan> {
        self.wheel.spin(rng, now)
    }

    /// Advances the wheel animation and the brew countdown to `now`.
    pub fn update(&mut self, now: Instant) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        for event in self.wheel.update(now) {
            match event {
                WheelEvent::Settled { winner_index } => {
                    let winner = self.catalog.get_by_index(winner_index).map(|p| p.id.clone());
                    if let Some(id) = winner {
                        self.select_index(winner_index);
                        events.push(SessionEvent::ProfileSelected { profile_id: id });
                    }
                }
                WheelEvent::RevealResults => events.push(SessionEvent::RevealResults),
            }
        }

        for _ in 0..self.ticker.due(now) {
            match self.timer.tick() {
                TimerEvent::Finished => {
                    self.ticker.disarm();
                    tracing::info!("Brew timer finished");
                    events.push(SessionEvent::TimerFinished);
                    break;
                }
                TimerEvent::Idle => {
                    self.ticker.disarm();
                    break;
                }
                TimerEvent::Ticked { .. } => {}
            }
        }

        events
    }

    /// Makes `id` the selected profile.
    ///
    /// Always halts the timer and resets it to the profile's brew time, even
    /// when `id` is already selected.
    pub fn select_profile(&mut self, id: &str) -> Result<()> {
        self.catalog.require(id)?;
        if let Some(index) = self.catalog.index_of(id) {
            self.select_index(index);
        }
        Ok(())
    }

    fn select_index(&mut self, index: usize) {
        let Some(profile) = self.catalog.get_by_index(index) else {
            return;
        };
        self.steps = brew_steps(profile.brew_method, profile.brew_time);
        self.timer.retarget(profile.brew_time);
        self.ticker.disarm();
        tracing::info!(profile = %profile.id, brew_time = profile.brew_time, "Profile selected");
        self.selected = Some(index);
    }

    /// Currently selected profile.
    #[must_use]
    pub fn selected_profile(&self) -> Option<&CoffeeProfile> {
        self.selected.and_then(|idx| self.catalog.get_by_index(idx))
    }

    /// Wheel index of the selected profile.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Chooses the grinder used for calibration and sharing.
    pub fn set_grinder(&mut self, grinder: GrinderId) {
        if self.grinder != grinder {
            tracing::debug!(grinder = %grinder, "Grinder changed");
        }
        self.grinder = grinder;
    }

    /// Switches to the next grinder and returns it.
    pub fn cycle_grinder(&mut self) -> GrinderId {
        self.set_grinder(self.grinder.next());
        self.grinder
    }

    /// Selected grinder.
    #[must_use]
    pub const fn grinder(&self) -> GrinderId {
        self.grinder
    }

    /// Starts or pauses the countdown. Returns the new running flag.
    ///
    /// Does nothing without a selected profile or once the countdown is over.
    pub fn toggle_timer(&mut self, now: Instant) -> bool {
        if self.selected.is_none() {
            return false;
        }
        let running = self.timer.toggle();
        if running {
            self.ticker.arm(now);
            tracing::info!(remaining = self.timer.remaining(), "Brew timer started");
        } else {
            self.ticker.disarm();
            tracing::info!(remaining = self.timer.remaining(), "Brew timer paused");
        }
        running
    }

    /// Halts the countdown and restores the full brew time.
    pub fn reset_timer(&mut self) {
        if self.selected.is_none() {
            return;
        }
        self.timer.reset();
        self.ticker.disarm();
        tracing::info!("Brew timer reset");
    }

    /// The brew countdown.
    #[must_use]
    pub const fn timer(&self) -> &BrewTimer {
        &self.timer
    }

    /// Steps for the selected profile; empty when nothing is selected.
    #[must_use]
    pub fn steps(&self) -> &[BrewStep] {
        &self.steps
    }

    /// Step containing the elapsed brew time.
    #[must_use]
    pub fn current_step(&self) -> Option<&BrewStep> {
        self.timer
            .current_step_index(&self.steps)
            .and_then(|idx| self.steps.get(idx))
    }

    /// Step to highlight; only while the countdown runs.
    #[must_use]
    pub fn active_step_index(&self) -> Option<usize> {
        self.timer.active_step_index(&self.steps)
    }

    /// Grind setting of the selected profile on the selected grinder.
    #[must_use]
    pub fn calibration(&self) -> Option<Calibration> {
        self.selected_profile()
            .map(|profile| Calibration::for_profile(profile, self.grinder))
    }

    /// Journey narrative for the selection.
    #[must_use]
    pub fn journey(&self) -> Vec<JourneyStage> {
        self.selected_profile()
            .map(|profile| journey_stages(profile, self.grinder))
            .unwrap_or_default()
    }

    /// Brew tip for the selected profile's method.
    #[must_use]
    pub fn tip(&self) -> Option<&'static str> {
        self.selected_profile().map(|p| architect_tip(p.brew_method))
    }
}
