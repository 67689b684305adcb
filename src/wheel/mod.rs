//! The method wheel.
//!
//! A spin draws a uniformly random segment and animates the wheel from its
//! current cumulative rotation to a target that lands the pointer on the
//! winner. The wheel is a small time-driven state machine:
//!
//! ```text
//! Idle ──spin──▶ Spinning ──spin_duration──▶ Settled ──spin──▶ Spinning ...
//! ```
//!
//! Time is passed in explicitly so callers (the TUI loop, tests) control it.

pub mod easing;
pub mod geometry;

use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

pub use easing::CubicBezier;
pub use geometry::{
    base_rotation, offset_from_segment_centre, plan_spin, segment_angle, segment_under_pointer,
    SpinPlan,
};

/// Tunable constants for the spin. Stored in the `[wheel]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpinTuning {
    /// Fewest whole extra turns per spin
    pub min_extra_spins: u32,
    /// Most whole extra turns per spin
    pub max_extra_spins: u32,
    /// Fraction of a segment the landing point may wander, centred on the segment
    pub jitter_fraction: f64,
    /// Length of the spin animation in milliseconds
    pub spin_duration_ms: u64,
    /// Pause between settling and revealing the results, in milliseconds
    pub reveal_delay_ms: u64,
}

impl Default for SpinTuning {
    fn default() -> Self {
        Self {
            min_extra_spins: 5,
            max_extra_spins: 7,
            jitter_fraction: 0.4,
            spin_duration_ms: 5000,
            reveal_delay_ms: 800,
        }
    }
}

impl SpinTuning {
    /// Validates the tuning values.
    pub fn validate(&self) -> Result<()> {
        if self.min_extra_spins == 0 {
            anyhow::bail!("wheel.min_extra_spins must be at least 1");
        }
        if self.min_extra_spins > self.max_extra_spins {
            anyhow::bail!(
                "wheel.min_extra_spins ({}) cannot exceed wheel.max_extra_spins ({})",
                self.min_extra_spins,
                self.max_extra_spins
            );
        }
        if !(0.0..1.0).contains(&self.jitter_fraction) {
            anyhow::bail!(
                "wheel.jitter_fraction must be in [0, 1), got {}",
                self.jitter_fraction
            );
        }
        Ok(())
    }

    /// Spin animation length.
    #[must_use]
    pub const fn spin_duration(&self) -> Duration {
        Duration::from_millis(self.spin_duration_ms)
    }

    /// Delay between settling and the reveal event.
    #[must_use]
    pub const fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

/// Something the wheel reports from [`Wheel::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelEvent {
    /// The animation finished on this segment
    Settled {
        /// Winning segment index
        winner_index: usize,
    },
    /// The reveal delay after settling has elapsed
    RevealResults,
}

/// Current phase of the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelState {
    /// Never spun
    Idle,
    /// Animating towards `plan.target_rotation`
    Spinning {
        /// The spin in progress
        plan: SpinPlan,
        /// When the animation started
        started_at: Instant,
    },
    /// Resting on a winner
    Settled {
        /// Winning segment index
        winner_index: usize,
        /// When the animation ended
        settled_at: Instant,
    },
}

/// The wheel: segment count, cumulative rotation and spin state.
#[derive(Debug, Clone)]
pub struct Wheel {
    segments: NonZeroUsize,
    tuning: SpinTuning,
    curve: CubicBezier,
    /// Cumulative rotation at rest, in degrees
    rotation: f64,
    state: WheelState,
    /// Reveal deadlines of settled spins, oldest first. A re-spin does not
    /// cancel them.
    pending_reveals: VecDeque<Instant>,
}

impl Wheel {
    /// Creates an idle wheel with `segments` equal slices.
    #[must_use]
    pub fn new(segments: NonZeroUsize, tuning: SpinTuning) -> Self {
        Self {
            segments,
            tuning,
            curve: CubicBezier::WHEEL,
            rotation: 0.0,
            state: WheelState::Idle,
            pending_reveals: VecDeque::new(),
        }
    }

    /// Number of segments.
    #[must_use]
    pub const fn segments(&self) -> NonZeroUsize {
        self.segments
    }

    /// Tuning in effect.
    #[must_use]
    pub const fn tuning(&self) -> &SpinTuning {
        &self.tuning
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> &WheelState {
        &self.state
    }

    /// True while the animation runs.
    #[must_use]
    pub const fn is_spinning(&self) -> bool {
        matches!(self.state, WheelState::Spinning { .. })
    }

    /// The settled winner, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<usize> {
        match self.state {
            WheelState::Settled { winner_index, .. } => Some(winner_index),
            _ => None,
        }
    }

    /// Starts a spin. Ignored (returns `None`) while a spin is in progress.
    pub fn spin<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> Option<SpinPlan> {
        if self.is_spinning() {
            tracing::debug!("Spin ignored: wheel already spinning");
            return None;
        }

        let plan = plan_spin(rng, self.segments, self.rotation, &self.tuning);
        tracing::info!(
            winner = plan.winner_index,
            extra_spins = plan.extra_spins,
            target = plan.target_rotation,
            "Wheel spin started"
        );
        self.state = WheelState::Spinning {
            plan,
            started_at: now,
        };
        Some(plan)
    }

    /// Advances the state machine to `now` and returns any events that fired.
    ///
    /// Each event fires exactly once per spin, including when the wheel is
    /// spun again before the previous reveal. A single late update may return
    /// both events.
    pub fn update(&mut self, now: Instant) -> Vec<WheelEvent> {
        let mut events = Vec::new();
        self.drain_reveals(now, &mut events);

        if let WheelState::Spinning { plan, started_at } = self.state {
            let settle_at = started_at + self.tuning.spin_duration();
            if now >= settle_at {
                self.rotation = plan.target_rotation;
                self.state = WheelState::Settled {
                    winner_index: plan.winner_index,
                    settled_at: settle_at,
                };
                self.pending_reveals.push_back(settle_at + self.tuning.reveal_delay());
                tracing::info!(winner = plan.winner_index, "Wheel settled");
                events.push(WheelEvent::Settled {
                    winner_index: plan.winner_index,
                });
                self.drain_reveals(now, &mut events);
            }
        }

        events
    }

    fn drain_reveals(&mut self, now: Instant, events: &mut Vec<WheelEvent>) {
        while self.pending_reveals.front().is_some_and(|due| now >= *due) {
            self.pending_reveals.pop_front();
            events.push(WheelEvent::RevealResults);
        }
    }

    /// Animated rotation in degrees at `now`.
    #[must_use]
    pub fn rotation_at(&self, now: Instant) -> f64 {
        match self.state {
            WheelState::Spinning { plan, started_at } => {
                let eased = self.curve.ease(self.fraction(started_at, now));
                plan.start_rotation + plan.travel() * eased
            }
            _ => self.rotation,
        }
    }

    /// Linear progress of the running spin in `[0, 1]`; 1 when at rest.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f64 {
        match self.state {
            WheelState::Spinning { started_at, .. } => self.fraction(started_at, now),
            _ => 1.0,
        }
    }

    /// Segment under the pointer at `now`.
    #[must_use]
    pub fn pointer_segment(&self, now: Instant) -> usize {
        segment_under_pointer(self.rotation_at(now), self.segments)
    }

    fn fraction(&self, started_at: Instant, now: Instant) -> f64 {
        let total = self.tuning.spin_duration().as_secs_f64();
        if total <= 0.0 {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(started_at).as_secs_f64();
        (elapsed / total).clamp(0.0, 1.0)
    }
}
