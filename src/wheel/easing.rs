//! CSS-style cubic bezier easing curves.

/// A cubic bezier timing function with fixed endpoints (0,0) and (1,1).
///
/// Equivalent to CSS `cubic-bezier(x1, y1, x2, y2)`: the input is the linear
/// time fraction, the output is the eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// The wheel's deceleration curve: fast start, long soft landing.
    pub const WHEEL: Self = Self::new(0.15, 0.0, 0.0, 1.0);

    const NEWTON_ITERATIONS: usize = 8;
    const BISECTION_ITERATIONS: usize = 40;
    const EPSILON: f64 = 1e-7;

    /// Creates a curve from its two control points.
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(p1: f64, p2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn sample_derivative(p1: f64, p2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// Finds the curve parameter whose x coordinate equals `x`.
    fn solve_t(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..Self::NEWTON_ITERATIONS {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < Self::EPSILON {
                return t;
            }
            let slope = Self::sample_derivative(self.x1, self.x2, t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= err / slope;
        }

        // Newton stalled on a flat region
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..Self::BISECTION_ITERATIONS {
            let value = Self::sample(self.x1, self.x2, t);
            if (value - x).abs() < Self::EPSILON {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        t
    }

    /// Eased progress for a linear time fraction. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn ease(&self, fraction: f64) -> f64 {
        if fraction <= 0.0 {
            return 0.0;
        }
        if fraction >= 1.0 {
            return 1.0;
        }
        let t = self.solve_t(fraction);
        Self::sample(self.y1, self.y2, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert!(CubicBezier::WHEEL.ease(0.0).abs() < f64::EPSILON);
        assert!((CubicBezier::WHEEL.ease(1.0) - 1.0).abs() < f64::EPSILON);
        assert!(CubicBezier::WHEEL.ease(-3.0).abs() < f64::EPSILON);
        assert!((CubicBezier::WHEEL.ease(7.0) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_linear_curve_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for step in 1..10 {
            let x = f64::from(step) / 10.0;
            assert!((linear.ease(x) - x).abs() < 1e-5, "x = {x}");
        }
    }

    #[test]
    fn test_wheel_curve_is_monotonic() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let eased = CubicBezier::WHEEL.ease(f64::from(step) / 100.0);
            assert!(eased >= previous - 1e-9, "step {step}: {eased} < {previous}");
            previous = eased;
        }
    }

    #[test]
    fn test_wheel_curve_front_loaded() {
        // Most of the travel happens in the first half
        assert!(CubicBezier::WHEEL.ease(0.5) > 0.85);
        assert!(CubicBezier::WHEEL.ease(0.1) > 0.2);
    }
}
