//! Easing curves used by the tween engine.

/// Easing function variants for tween curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Quadratic ease-in-out: accelerates through the first half, decelerates
    /// through the second, never overshoots.
    QuadraticInOut,
}

impl Easing {
    /// Curve used for every carousel transition.
    pub const DEFAULT: Easing = Easing::QuadraticInOut;

    /// Evaluate the curve at `t`, clamped to \[0, 1\].
    #[inline]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
            Easing::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u / 2.0
                }
            }
        }
    }
}

impl Default for Easing {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for e in [
            Easing::Linear,
            Easing::QuadraticIn,
            Easing::QuadraticOut,
            Easing::QuadraticInOut,
        ] {
            assert_eq!(e.evaluate(0.0), 0.0, "{e:?} at 0");
            assert!((e.evaluate(1.0) - 1.0).abs() < 1e-6, "{e:?} at 1");
        }
    }

    #[test]
    fn test_in_out_is_symmetric_around_midpoint() {
        let e = Easing::QuadraticInOut;
        assert!((e.evaluate(0.5) - 0.5).abs() < 1e-6);
        for i in 1..10 {
            let t = i as f32 / 20.0;
            let a = e.evaluate(t);
            let b = e.evaluate(1.0 - t);
            assert!((a + b - 1.0).abs() < 1e-5, "asymmetric at t={t}");
        }
    }

    #[test]
    fn test_in_out_accelerates_then_decelerates() {
        let e = Easing::QuadraticInOut;
        // slower than linear early, faster than linear late
        assert!(e.evaluate(0.25) < 0.25);
        assert!(e.evaluate(0.75) > 0.75);
    }

    #[test]
    fn test_in_out_never_overshoots() {
        let e = Easing::QuadraticInOut;
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = e.evaluate(i as f32 / 100.0);
            assert!((0.0..=1.0).contains(&v));
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_input_clamping() {
        assert_eq!(Easing::Linear.evaluate(-0.5), 0.0);
        assert_eq!(Easing::Linear.evaluate(1.5), 1.0);
        assert_eq!(Easing::QuadraticInOut.evaluate(-3.0), 0.0);
        assert!((Easing::QuadraticInOut.evaluate(4.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_in_out() {
        assert_eq!(Easing::default(), Easing::QuadraticInOut);
    }
}
