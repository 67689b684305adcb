//! Converts wall-clock time into whole-second ticks.

use std::time::{Duration, Instant};

const ONE_SECOND: Duration = Duration::from_secs(1);

/// Tracks when the next one-second tick is due.
///
/// The TUI polls far more often than once a second; the ticker hands out one
/// tick per elapsed second and keeps the sub-second remainder for the next
/// poll. A disarmed ticker never fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecondTicker {
    next_due: Option<Instant>,
}

impl SecondTicker {
    /// A disarmed ticker.
    #[must_use]
    pub const fn new() -> Self {
        Self { next_due: None }
    }

    /// Schedules the first tick one second after `now`.
    pub fn arm(&mut self, now: Instant) {
        self.next_due = Some(now + ONE_SECOND);
    }

    /// Cancels any pending tick.
    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    /// Whether ticks are being produced.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of whole seconds that elapsed up to `now`.
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(mut next) = self.next_due else {
            return 0;
        };
        let mut ticks = 0;
        while next <= now {
            ticks += 1;
            next += ONE_SECOND;
        }
        self.next_due = Some(next);
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_never_ticks() {
        let mut ticker = SecondTicker::new();
        assert_eq!(ticker.due(Instant::now() + Duration::from_secs(10)), 0);
    }

    #[test]
    fn test_one_tick_per_second() {
        let t0 = Instant::now();
        let mut ticker = SecondTicker::new();
        ticker.arm(t0);

        assert_eq!(ticker.due(t0 + Duration::from_millis(900)), 0);
        assert_eq!(ticker.due(t0 + Duration::from_millis(1000)), 1);
        assert_eq!(ticker.due(t0 + Duration::from_millis(1100)), 0);
        assert_eq!(ticker.due(t0 + Duration::from_millis(4050)), 3);
    }

    #[test]
    fn test_disarm_drops_pending() {
        let t0 = Instant::now();
        let mut ticker = SecondTicker::new();
        ticker.arm(t0);
        ticker.disarm();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.due(t0 + Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_rearm_restarts_phase() {
        let t0 = Instant::now();
        let mut ticker = SecondTicker::new();
        ticker.arm(t0);
        ticker.arm(t0 + Duration::from_millis(700));
        assert_eq!(ticker.due(t0 + Duration::from_millis(1500)), 0);
        assert_eq!(ticker.due(t0 + Duration::from_millis(1700)), 1);
    }
}
