//! Supported manual grinders.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one of the three supported manual grinders.
///
/// Each grinder has its own click scale, so a profile stores one tick value
/// per grinder (see [`GrindTicks`](super::GrindTicks)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum GrinderId {
    /// Comandante C40
    Comandante,
    /// Timemore C3S Pro
    #[default]
    TimemoreC3s,
    /// Kingrinder K6
    Kingrinder,
}

impl GrinderId {
    /// All grinders in display order.
    pub const ALL: [Self; 3] = [Self::Comandante, Self::TimemoreC3s, Self::Kingrinder];

    /// Stable identifier used in config files, share links and the CLI.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Comandante => "comandante",
            Self::TimemoreC3s => "timemore_c3s",
            Self::Kingrinder => "kingrinder",
        }
    }

    /// Human-readable model name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Comandante => "Comandante C40",
            Self::TimemoreC3s => "Timemore C3S Pro",
            Self::Kingrinder => "Kingrinder K6",
        }
    }

    /// The next grinder in display order, wrapping around.
    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Comandante => Self::TimemoreC3s,
            Self::TimemoreC3s => Self::Kingrinder,
            Self::Kingrinder => Self::Comandante,
        }
    }

    /// Position of this grinder in [`GrinderId::ALL`].
    #[must_use]
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|g| g == self).unwrap_or(0)
    }
}

impl fmt::Display for GrinderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GrinderId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|g| g.id() == normalized)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(GrinderId::id).collect();
                anyhow::anyhow!(
                    "Unknown grinder '{}'. Valid grinders: {}",
                    s,
                    valid.join(", ")
                )
            })
    }
}
