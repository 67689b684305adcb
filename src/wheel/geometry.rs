//! Angle arithmetic for the method wheel.
//!
//! Segment `i` is centred at `i * segment_angle` degrees in wheel coordinates.
//! The pointer sits at 0° (top). Rotating the wheel clockwise by `r` degrees
//! places the wheel coordinate `-r mod 360` under the pointer.

use rand::Rng;
use std::num::NonZeroUsize;

use super::SpinTuning;

/// Degrees in one revolution.
pub const FULL_TURN: f64 = 360.0;

/// Angular width of one segment in degrees.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn segment_angle(segments: NonZeroUsize) -> f64 {
    FULL_TURN / segments.get() as f64
}

/// Clockwise rotation (in `[0, 360)`) that brings segment `index` under the pointer.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn base_rotation(index: usize, segments: NonZeroUsize) -> f64 {
    (FULL_TURN - index as f64 * segment_angle(segments)).rem_euclid(FULL_TURN)
}

/// Index of the segment under the pointer for an absolute wheel rotation.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn segment_under_pointer(rotation: f64, segments: NonZeroUsize) -> usize {
    let under_pointer = (-rotation).rem_euclid(FULL_TURN);
    let slot = (under_pointer / segment_angle(segments)).round() as usize;
    slot % segments.get()
}

/// Signed distance in degrees between the pointer and the centre of the
/// segment it points at. Always within half a segment.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn offset_from_segment_centre(rotation: f64, segments: NonZeroUsize) -> f64 {
    let index = segment_under_pointer(rotation, segments);
    let centre = base_rotation(index, segments);
    let delta = (rotation - centre).rem_euclid(FULL_TURN);
    if delta > FULL_TURN / 2.0 {
        delta - FULL_TURN
    } else {
        delta
    }
}

/// The outcome of one spin: winner plus the rotation that lands on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinPlan {
    /// Winning segment index in `[0, segments)`
    pub winner_index: usize,
    /// Whole extra turns added for a convincing spin
    pub extra_spins: u32,
    /// Rotation that centres the winner under the pointer, in `[0, 360)`
    pub base_rotation: f64,
    /// Sub-segment jitter in degrees
    pub offset: f64,
    /// Cumulative rotation when the spin started
    pub start_rotation: f64,
    /// Cumulative rotation when the spin ends
    pub target_rotation: f64,
}

impl SpinPlan {
    /// Total degrees travelled by this spin.
    #[must_use]
    pub fn travel(&self) -> f64 {
        self.target_rotation - self.start_rotation
    }
}

/// Draws a winner and computes its landing rotation.
///
/// The target accumulates on top of `current_rotation`: it starts from the
/// next whole turn at or after the current position and adds the extra spins,
/// so it is always strictly greater than `current_rotation`.
#[allow(clippy::cast_precision_loss)]
pub fn plan_spin<R: Rng + ?Sized>(
    rng: &mut R,
    segments: NonZeroUsize,
    current_rotation: f64,
    tuning: &SpinTuning,
) -> SpinPlan {
    let winner_index = rng.random_range(0..segments.get());
    let extra_spins = rng.random_range(tuning.min_extra_spins..=tuning.max_extra_spins);

    let half_jitter = segment_angle(segments) * tuning.jitter_fraction / 2.0;
    let offset = if half_jitter > 0.0 {
        rng.random_range(-half_jitter..half_jitter)
    } else {
        0.0
    };

    let base = base_rotation(winner_index, segments);
    let turns_so_far = (current_rotation / FULL_TURN).ceil().max(0.0);
    let target_rotation =
        (turns_so_far + f64::from(extra_spins)) * FULL_TURN + base + offset;

    SpinPlan {
        winner_index,
        extra_spins,
        base_rotation: base,
        offset,
        start_rotation: current_rotation,
        target_rotation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn n(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).unwrap()
    }

    #[test]
    fn test_segment_angle() {
        assert!((segment_angle(n(6)) - 60.0).abs() < f64::EPSILON);
        assert!((segment_angle(n(1)) - 360.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_rotation_for_six_segments() {
        let expected = [0.0, 300.0, 240.0, 180.0, 120.0, 60.0];
        for (index, want) in expected.iter().enumerate() {
            let got = base_rotation(index, n(6));
            assert!((got - want).abs() < 1e-9, "segment {index}: {got} != {want}");
        }
    }

    #[test]
    fn test_pointer_inverts_base_rotation() {
        for count in 1..=12 {
            for index in 0..count {
                let rotation = base_rotation(index, n(count)) + 360.0 * 5.0;
                assert_eq!(segment_under_pointer(rotation, n(count)), index);
            }
        }
    }

    #[test]
    fn test_pointer_with_jitter_stays_on_segment() {
        // 20% of a 60 degree segment either side of the centre
        for index in 0..6 {
            let centre = base_rotation(index, n(6)) + 720.0;
            assert_eq!(segment_under_pointer(centre + 11.9, n(6)), index);
            assert_eq!(segment_under_pointer(centre - 11.9, n(6)), index);
        }
    }

    #[test]
    fn test_offset_from_centre_signed() {
        let rotation = base_rotation(2, n(6)) + 1080.0 - 7.5;
        let offset = offset_from_segment_centre(rotation, n(6));
        assert!((offset + 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_plan_lands_on_winner_for_all_sizes() {
        let tuning = SpinTuning::default();
        let mut rng = StdRng::seed_from_u64(7);
        for count in 1..=10 {
            let mut rotation = 0.0;
            for _ in 0..50 {
                let plan = plan_spin(&mut rng, n(count), rotation, &tuning);
                assert!(plan.winner_index < count);
                assert_eq!(
                    segment_under_pointer(plan.target_rotation, n(count)),
                    plan.winner_index
                );

                let bound = segment_angle(n(count)) * tuning.jitter_fraction / 2.0;
                let offset = offset_from_segment_centre(plan.target_rotation, n(count));
                assert!(offset.abs() <= bound + 1e-9, "offset {offset} exceeds {bound}");

                rotation = plan.target_rotation;
            }
        }
    }

    #[test]
    fn test_targets_strictly_increase() {
        let tuning = SpinTuning::default();
        let mut rng = StdRng::seed_from_u64(42);
        let mut rotation = 0.0;
        for _ in 0..200 {
            let plan = plan_spin(&mut rng, n(6), rotation, &tuning);
            assert!(plan.target_rotation > rotation);
            assert!(plan.travel() >= 360.0 * f64::from(tuning.min_extra_spins) - 12.0);
            rotation = plan.target_rotation;
        }
    }

    #[test]
    fn test_extra_spins_within_range() {
        let tuning = SpinTuning::default();
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let plan = plan_spin(&mut rng, n(6), 0.0, &tuning);
            assert!((5..=7).contains(&plan.extra_spins));
            seen[(plan.extra_spins - 5) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s), "every spin count should occur");
    }

    #[test]
    fn test_zero_jitter_centres_exactly() {
        let tuning = SpinTuning {
            jitter_fraction: 0.0,
            ..SpinTuning::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let plan = plan_spin(&mut rng, n(6), 123.0, &tuning);
        assert!(plan.offset.abs() < f64::EPSILON);
        assert!((plan.target_rotation.rem_euclid(360.0) - plan.base_rotation).abs() < 1e-9);
    }

    #[test]
    fn test_every_winner_is_reachable() {
        let tuning = SpinTuning::default();
        let mut rng = StdRng::seed_from_u64(99);
        let mut hits = [0u32; 6];
        for _ in 0..600 {
            hits[plan_spin(&mut rng, n(6), 0.0, &tuning).winner_index] += 1;
        }
        assert!(hits.iter().all(|&h| h > 0));
    }
}
