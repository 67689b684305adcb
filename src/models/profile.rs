//! Coffee profile records.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::GrinderId;

/// Roast level of the beans used by a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoastLevel {
    /// Light roast
    Light,
    /// Medium roast
    Medium,
    /// Dark roast
    Dark,
}

impl fmt::Display for RoastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Dark => "Dark",
        };
        f.write_str(label)
    }
}

/// Brewing method. Determines the step table used by the brew timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrewMethod {
    /// Hario V60 pour over
    #[serde(rename = "V60")]
    V60,
    /// AeroPress
    Aeropress,
    /// Espresso machine
    Espresso,
    /// French press immersion
    #[serde(rename = "French Press")]
    FrenchPress,
    /// Stovetop moka pot
    #[serde(rename = "Moka Pot")]
    MokaPot,
    /// Simplified everyday pour over
    #[serde(rename = "Easy Pour")]
    EasyPour,
    /// Any method without a dedicated step table
    #[serde(other)]
    Other,
}

impl BrewMethod {
    /// Display label, matching the catalog spelling.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::V60 => "V60",
            Self::Aeropress => "Aeropress",
            Self::Espresso => "Espresso",
            Self::FrenchPress => "French Press",
            Self::MokaPot => "Moka Pot",
            Self::EasyPour => "Easy Pour",
            Self::Other => "Custom",
        }
    }
}

impl fmt::Display for BrewMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Grind setting per supported grinder, in ticks/clicks from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrindTicks {
    /// Clicks on a Comandante C40
    pub comandante: u32,
    /// Clicks on a Timemore C3S Pro
    pub timemore_c3s: u32,
    /// Clicks on a Kingrinder K6
    pub kingrinder: u32,
}

impl GrindTicks {
    /// Ticks for the given grinder.
    #[must_use]
    pub const fn for_grinder(&self, grinder: GrinderId) -> u32 {
        match grinder {
            GrinderId::Comandante => self.comandante,
            GrinderId::TimemoreC3s => self.timemore_c3s,
            GrinderId::Kingrinder => self.kingrinder,
        }
    }
}

/// A named coffee/brew configuration.
///
/// Profiles are static catalog data: loaded once at startup and never mutated.
///
/// # Validation
///
/// - `id` must be non-empty kebab-case
/// - `region` must be non-empty
/// - `brew_time` must be positive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoffeeProfile {
    /// Unique identifier in kebab-case (e.g., "pour-over")
    pub id: String,
    /// Display name, e.g. "The Funk & Boom (Pour Over)"
    pub region: String,
    /// Flavor notes in display order
    pub notes: Vec<String>,
    /// Roast level of the beans
    pub roast_level: RoastLevel,
    /// Grind setting for each supported grinder
    pub grind_ticks: GrindTicks,
    /// Brewing method
    pub brew_method: BrewMethod,
    /// Total brew time in seconds
    pub brew_time: u32,
    /// Short narrative shown on the profile card
    pub story: String,
}

impl CoffeeProfile {
    /// Validates the profile fields.
    pub fn validate(&self) -> Result<()> {
        Self::validate_id(&self.id)?;

        if self.region.trim().is_empty() {
            anyhow::bail!("Profile '{}' has an empty region", self.id);
        }

        if self.brew_time == 0 {
            anyhow::bail!("Profile '{}' must have a positive brew time", self.id);
        }

        Ok(())
    }

    /// Validates profile ID format (kebab-case).
    fn validate_id(id: &str) -> Result<()> {
        if id.is_empty() {
            anyhow::bail!("Profile ID cannot be empty");
        }

        if !id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            anyhow::bail!(
                "Profile ID '{id}' must be kebab-case (lowercase, hyphens, and digits only)"
            );
        }

        if id.starts_with('-') || id.ends_with('-') {
            anyhow::bail!("Profile ID '{id}' cannot start or end with a hyphen");
        }

        Ok(())
    }

    /// Grind ticks for the given grinder.
    #[must_use]
    pub const fn ticks_for(&self, grinder: GrinderId) -> u32 {
        self.grind_ticks.for_grinder(grinder)
    }
}
