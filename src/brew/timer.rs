//! Countdown timer for a brew.

use super::steps::{step_index_at, BrewStep};

/// Result of one [`BrewTimer::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Timer was not running; nothing changed
    Idle,
    /// One second elapsed
    Ticked {
        /// Seconds left after the tick
        remaining: u32,
    },
    /// The countdown reached zero and the timer stopped
    Finished,
}

/// One-second-resolution countdown from the selected profile's brew time.
///
/// `remaining` never goes below zero and the timer never restarts itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrewTimer {
    total: u32,
    remaining: u32,
    running: bool,
}

impl BrewTimer {
    /// A halted timer with `total` seconds remaining.
    #[must_use]
    pub const fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
            running: false,
        }
    }

    /// Total brew time in seconds.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.total
    }

    /// Seconds left.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Whether the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// True once the countdown has reached zero.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Starts the countdown. Returns false (and stays halted) when nothing is left.
    pub fn start(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.running = true;
        true
    }

    /// Halts the countdown, keeping the remaining time.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Start when halted, pause when running. Returns the new running flag.
    pub fn toggle(&mut self) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start();
        }
        self.running
    }

    /// Advances the countdown by one second.
    pub fn tick(&mut self) -> TimerEvent {
        if !self.running {
            return TimerEvent::Idle;
        }
        if self.remaining <= 1 {
            self.remaining = 0;
            self.running = false;
            return TimerEvent::Finished;
        }
        self.remaining -= 1;
        TimerEvent::Ticked {
            remaining: self.remaining,
        }
    }

    /// Halts and restores the full brew time.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = self.total;
    }

    /// Halts and switches to a new brew time.
    pub fn retarget(&mut self, total: u32) {
        self.total = total;
        self.reset();
    }

    /// Seconds since the brew started.
    #[must_use]
    pub const fn elapsed(&self) -> u32 {
        self.total.saturating_sub(self.remaining)
    }

    /// Completion percentage in `[0, 100]`; 0 when the total is 0.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.elapsed()) / f64::from(self.total) * 100.0
    }

    /// Remaining time as `M:SS`.
    #[must_use]
    pub fn display(&self) -> String {
        format_clock(self.remaining)
    }

    /// Step containing the elapsed time.
    #[must_use]
    pub fn current_step_index(&self, steps: &[BrewStep]) -> Option<usize> {
        step_index_at(steps, self.elapsed())
    }

    /// Step to highlight: only while the countdown is running.
    #[must_use]
    pub fn active_step_index(&self, steps: &[BrewStep]) -> Option<usize> {
        if self.running {
            self.current_step_index(steps)
        } else {
            None
        }
    }
}

/// Formats seconds as `M:SS` (minutes are not wrapped at 60).
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
