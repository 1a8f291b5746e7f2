use crate::foundation::error::{ReelError, ReelResult};

/// Shaping function applied to normalized progress.
///
/// Every variant maps `[0, 1]` onto `[0, 1]` with `apply(0) == 0` and `apply(1) == 1`.
/// Inputs outside `[0, 1]` are clamped first.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Identity.
    #[default]
    Linear,
    /// Quadratic acceleration.
    InQuad,
    /// Quadratic deceleration.
    OutQuad,
    /// Quadratic acceleration then deceleration.
    InOutQuad,
    /// Cubic acceleration.
    InCubic,
    /// Cubic deceleration.
    OutCubic,
    /// Cubic acceleration then deceleration.
    InOutCubic,
    /// Sinusoidal acceleration.
    InSine,
    /// Sinusoidal deceleration.
    OutSine,
    /// Sinusoidal acceleration then deceleration.
    InOutSine,
    /// Exponential acceleration.
    InExpo,
    /// Exponential deceleration.
    OutExpo,
    /// Exponential acceleration then deceleration.
    InOutExpo,
    /// Circular acceleration.
    InCirc,
    /// Circular deceleration.
    OutCirc,
    /// Circular acceleration then deceleration.
    InOutCirc,
    /// CSS-style cubic bezier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    CubicBezier {
        /// First control point x, in `[0, 1]`.
        x1: f64,
        /// First control point y, in `[0, 1]`.
        y1: f64,
        /// Second control point x, in `[0, 1]`.
        x2: f64,
        /// Second control point y, in `[0, 1]`.
        y2: f64,
    },
}

impl Ease {
    /// Shape `t`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InSine => 1.0 - (t * std::f64::consts::FRAC_PI_2).cos(),
            Self::OutSine => (t * std::f64::consts::FRAC_PI_2).sin(),
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::InOutExpo => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Self::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Self::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier_ease(t, x1, y1, x2, y2),
        }
    }

    /// Reject bezier control points that would make the curve ill-defined.
    pub fn validate(self) -> ReelResult<()> {
        if let Self::CubicBezier { x1, y1, x2, y2 } = self {
            if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
                return Err(ReelError::animation(
                    "cubic bezier control points must be finite",
                ));
            }
            if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
                return Err(ReelError::animation(
                    "cubic bezier x1/x2 must be within [0, 1]",
                ));
            }
            // Control points inside the unit square keep the curve inside it.
            if !(0.0..=1.0).contains(&y1) || !(0.0..=1.0).contains(&y2) {
                return Err(ReelError::animation(
                    "cubic bezier y1/y2 must be within [0, 1]",
                ));
            }
        }
        Ok(())
    }
}

fn cubic_bezier_ease(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    // Solve u with bx(u) = x, then return by(u).
    fn sample_curve(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * t * a1 + 3.0 * omt * t * t * a2 + t * t * t
    }
    fn sample_curve_derivative(a1: f64, a2: f64, t: f64) -> f64 {
        let omt = 1.0 - t;
        3.0 * omt * omt * a1 + 6.0 * omt * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    // Newton-Raphson, fixed iteration count.
    let mut t = x;
    for _ in 0..8 {
        let x_t = sample_curve(x1, x2, t) - x;
        if x_t.abs() < 1e-9 {
            return sample_curve(y1, y2, t);
        }
        let d = sample_curve_derivative(x1, x2, t);
        if d.abs() < 1e-7 {
            break;
        }
        t = (t - x_t / d).clamp(0.0, 1.0);
    }

    // Newton stalled on a flat section; bisection always converges since bx is monotone.
    let mut lo = 0.0;
    let mut hi = 1.0;
    t = x;
    for _ in 0..40 {
        let x_t = sample_curve(x1, x2, t);
        if (x_t - x).abs() < 1e-9 {
            break;
        }
        if x_t < x {
            lo = t;
        } else {
            hi = t;
        }
        t = 0.5 * (lo + hi);
    }

    sample_curve(y1, y2, t)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
