//! Per-method brew step tables.

use serde::Serialize;

use crate::models::BrewMethod;

/// One named phase of a brew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrewStep {
    /// Step name, e.g. "Bloom"
    pub name: &'static str,
    /// Duration in seconds; trailing steps may be 0 when the brew is short
    pub duration: u32,
    /// What to do during the step
    pub instruction: &'static str,
}

impl BrewStep {
    const fn new(name: &'static str, duration: u32, instruction: &'static str) -> Self {
        Self {
            name,
            duration,
            instruction,
        }
    }
}

/// Splits a brew of `total` seconds into the steps for `method`.
///
/// Fixed-length leading steps keep their length even when they exceed the
/// total; the remaining step is floored at 0.
#[must_use]
pub fn brew_steps(method: BrewMethod, total: u32) -> Vec<BrewStep> {
    match method {
        BrewMethod::V60 => vec![
            BrewStep::new("Bloom", 30, "Pour 50g water. Let the gases escape."),
            BrewStep::new("First Pour", 60, "Pour to 150g in circular motions."),
            BrewStep::new(
                "Final Pour",
                total.saturating_sub(90),
                "Pour to total weight. Wait for drawdown.",
            ),
        ],
        BrewMethod::Espresso => vec![
            BrewStep::new(
                "Pre-infusion",
                5,
                "Start extraction slowly to saturate the puck.",
            ),
            BrewStep::new(
                "Extraction",
                total.saturating_sub(5),
                "Maintain steady pressure. Aim for golden crema.",
            ),
        ],
        BrewMethod::Aeropress => vec![
            BrewStep::new("Bloom & Stir", 30, "Pour water and stir gently. Let it bloom."),
            BrewStep::new(
                "Steep",
                total.saturating_sub(30),
                "Let it steep, then press slowly and steadily.",
            ),
        ],
        BrewMethod::FrenchPress => vec![
            BrewStep::new("Bloom", 30, "Pour water and let the coffee bloom."),
            BrewStep::new(
                "Steep",
                total.saturating_sub(30),
                "Steep for the remaining time, then press down slowly.",
            ),
        ],
        BrewMethod::MokaPot => {
            // floor(0.3 * total) without overflowing
            let heat = total / 10 * 3 + total % 10 * 3 / 10;
            vec![
                BrewStep::new("Heat", heat, "Heat on medium until coffee starts flowing."),
                BrewStep::new(
                    "Extraction",
                    total - heat,
                    "Coffee flows into upper chamber. Remove from heat when done.",
                ),
            ]
        }
        BrewMethod::EasyPour => vec![
            BrewStep::new("Bloom", 30, "Pour water evenly and let it bloom."),
            BrewStep::new(
                "Pour",
                total.saturating_sub(30),
                "Continue pouring in a steady, circular motion.",
            ),
        ],
        BrewMethod::Other => vec![BrewStep::new(
            "Brew",
            total,
            "Follow your brewing method's instructions.",
        )],
    }
}

/// The brew master's tip for a method.
#[must_use]
pub const fn architect_tip(method: BrewMethod) -> &'static str {
    match method {
        BrewMethod::V60 => "Pour in concentric circles from the center outward. Avoid pouring directly onto the filter paper to prevent channeling.",
        BrewMethod::Espresso => "Aim for a 25-30 second extraction. Watch for tiger-striped crema and adjust grind if needed.",
        BrewMethod::Aeropress => "Press slowly and steadily. Stop pressing when you hear air hissing to avoid bitterness.",
        BrewMethod::FrenchPress => "Use a coarse grind and steep for 4 minutes. Press down slowly and serve immediately.",
        BrewMethod::MokaPot => "Fill the bottom chamber with hot water up to the safety valve. Use medium heat and remove when coffee stops flowing.",
        BrewMethod::EasyPour => "Pour steadily in a circular motion. Keep the water level consistent for even extraction.",
        BrewMethod::Other => "Follow your brewing method's specific instructions for best results.",
    }
}

/// Index of the step containing `elapsed` seconds.
///
/// Returns the first step whose cumulative end lies after `elapsed`; once the
/// brew is over, the last step. `None` only for an empty list.
#[must_use]
pub fn step_index_at(steps: &[BrewStep], elapsed: u32) -> Option<usize> {
    let mut cumulative = 0u32;
    for (idx, step) in steps.iter().enumerate() {
        cumulative = cumulative.saturating_add(step.duration);
        if elapsed < cumulative {
            return Some(idx);
        }
    }
    steps.len().checked_sub(1)
}

/// Sum of step durations.
#[must_use]
pub fn total_duration(steps: &[BrewStep]) -> u32 {
    steps.iter().map(|s| s.duration).sum()
}
