//! Easing functions for camera flight interpolation.

/// Easing curve applied to a normalized flight progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Cubic Hermite with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f32,
        /// Second control point.
        c2: f32,
    },
}

impl EasingFunction {
    /// Default easing: Hermite with c1=0.33, c2=1.0 for a natural ease-out
    /// feel on camera flights.
    pub const DEFAULT: EasingFunction =
        EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };

    /// Evaluate the curve at progress `t`.
    ///
    /// Input is clamped to [0, 1]; the result stays in [0, 1].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt
                    + c2 * 3.0 * omt * t * t
                    + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_fixed() {
        for easing in [
            EasingFunction::Linear,
            EasingFunction::QuadraticOut,
            EasingFunction::DEFAULT,
        ] {
            assert!((easing.evaluate(0.0)).abs() < 1e-6);
            assert!((easing.evaluate(1.0) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn input_is_clamped() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);
    }

    #[test]
    fn default_hermite_eases_out() {
        // Ease-out makes more than a quarter of the progress by t=0.25.
        let eased = EasingFunction::DEFAULT.evaluate(0.25);
        assert!(eased > 0.25, "expected ease-out, got {eased}");
    }
}
