//! The bean-to-cup narrative for a profile.

use serde::Serialize;

use crate::calibration::Calibration;
use crate::models::{CoffeeProfile, GrinderId};

/// One stage of the journey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JourneyStage {
    /// Stage heading
    pub title: &'static str,
    /// Narrative text with the profile's details filled in
    pub description: String,
}

/// The four journey stages for `profile` ground on `grinder`.
#[must_use]
pub fn journey_stages(profile: &CoffeeProfile, grinder: GrinderId) -> Vec<JourneyStage> {
    let calibration = Calibration::for_profile(profile, grinder);
    let minutes = f64::from(profile.brew_time) / 60.0;

    vec![
        JourneyStage {
            title: "Cultivation & Origin",
            description: format!(
                "Grown in the high-altitude regions of {}. The terroir provides the structural \
                 foundation for the acidity and body we architect.",
                profile.region
            ),
        },
        JourneyStage {
            title: "The Roast Architecture",
            description: format!(
                "Roasted to a {} level. This stage is where we develop the chemical complexity, \
                 transforming raw acids into the {} notes you selected.",
                profile.roast_level,
                profile.notes.join(", ")
            ),
        },
        JourneyStage {
            title: "Precision Grinding",
            description: format!(
                "Ground with surgical precision. Using {} clicks on your {} ensures the surface \
                 area is optimized for the intended extraction profile.",
                calibration.ticks, calibration.grinder_name
            ),
        },
        JourneyStage {
            title: "Sensory Extraction",
            description: format!(
                "The final stage. Brewed via {} for {} minutes. Water acts as the solvent, \
                 bringing the architect's vision into your cup.",
                profile.brew_method, minutes
            ),
        },
    ]
}
