//! Grinder calibration for the selected profile.

use serde::Serialize;

use crate::models::{CoffeeProfile, GrinderId};

/// Degrees the dial graphic turns per click.
pub const DEGREES_PER_TICK: u32 = 10;

/// Grind setting for one profile on one grinder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Calibration {
    /// Grinder the setting applies to
    pub grinder: GrinderId,
    /// Grinder model name
    pub grinder_name: &'static str,
    /// Clicks from zero
    pub ticks: u32,
}

impl Calibration {
    /// Calibration of `profile` on `grinder`.
    #[must_use]
    pub const fn for_profile(profile: &CoffeeProfile, grinder: GrinderId) -> Self {
        Self {
            grinder,
            grinder_name: grinder.name(),
            ticks: profile.ticks_for(grinder),
        }
    }

    /// Total dial rotation in degrees.
    #[must_use]
    pub const fn dial_rotation(&self) -> u32 {
        self.ticks.saturating_mul(DEGREES_PER_TICK)
    }

    /// Dial rotation folded into a single turn, for drawing.
    #[must_use]
    pub const fn dial_angle(&self) -> u32 {
        self.dial_rotation() % 360
    }

    /// Advisory text shown under the dial.
    #[must_use]
    pub fn advice(&self) -> String {
        format!(
            "Start at {} and adjust by \u{b1}1 for personal taste.",
            self.ticks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_calibration_per_grinder() {
        let catalog = Catalog::load().unwrap();
        let profile = catalog.get("pour-over").unwrap();

        let cal = Calibration::for_profile(profile, GrinderId::Comandante);
        assert_eq!(cal.ticks, 18);
        assert_eq!(cal.grinder_name, "Comandante C40");
        assert_eq!(cal.dial_rotation(), 180);

        let cal = Calibration::for_profile(profile, GrinderId::Kingrinder);
        assert_eq!(cal.ticks, 90);
        assert_eq!(cal.dial_rotation(), 900);
        assert_eq!(cal.dial_angle(), 180);
    }

    #[test]
    fn test_advice_text() {
        let catalog = Catalog::load().unwrap();
        let espresso = catalog.get("espresso").unwrap();
        let cal = Calibration::for_profile(espresso, GrinderId::TimemoreC3s);
        assert_eq!(cal.advice(), "Start at 9 and adjust by ±1 for personal taste.");
    }
}
