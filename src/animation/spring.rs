use crate::{
    foundation::core::Fps,
    foundation::error::{ReelError, ReelResult},
};

/// Physical parameters of a spring animation.
///
/// Displacement starts at rest (0) and settles toward 1. `initial_velocity` is in
/// displacement units per second, positive toward the target.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Must be > 0.
    pub mass: f64,
    /// Must be > 0.
    pub stiffness: f64,
    /// Must be >= 0. Zero gives an undamped oscillator that never settles.
    pub damping: f64,
    /// Velocity at the activation point.
    pub initial_velocity: f64,
    /// Frames spent at rest before the spring starts moving.
    pub delay_frames: f64,
    /// Cap the value at 1 instead of overshooting.
    pub overshoot_clamping: bool,
    /// Distance from 1 under which the spring counts as settled.
    pub settle_epsilon: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
            initial_velocity: 0.0,
            delay_frames: 0.0,
            overshoot_clamping: false,
            settle_epsilon: 0.005,
        }
    }
}

impl SpringConfig {
    /// Replace `stiffness` and `damping`, keeping everything else.
    pub fn with_stiffness_damping(mut self, stiffness: f64, damping: f64) -> Self {
        self.stiffness = stiffness;
        self.damping = damping;
        self
    }

    /// Replace the activation delay.
    pub fn delayed(mut self, delay_frames: f64) -> Self {
        self.delay_frames = delay_frames;
        self
    }

    /// Check every field, naming the first offending one.
    pub fn validate(&self) -> ReelResult<()> {
        let fields = [
            ("mass", self.mass),
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("initial_velocity", self.initial_velocity),
            ("delay_frames", self.delay_frames),
            ("settle_epsilon", self.settle_epsilon),
        ];
        for (name, v) in fields {
            if !v.is_finite() {
                return Err(ReelError::animation(format!(
                    "spring config: {name} must be finite (got {v})"
                )));
            }
        }
        if self.mass <= 0.0 {
            return Err(ReelError::animation(format!(
                "spring config: mass must be > 0 (got {})",
                self.mass
            )));
        }
        if self.stiffness <= 0.0 {
            return Err(ReelError::animation(format!(
                "spring config: stiffness must be > 0 (got {})",
                self.stiffness
            )));
        }
        if self.damping < 0.0 {
            return Err(ReelError::animation(format!(
                "spring config: damping must be >= 0 (got {})",
                self.damping
            )));
        }
        if self.delay_frames < 0.0 {
            return Err(ReelError::animation(format!(
                "spring config: delay_frames must be >= 0 (got {})",
                self.delay_frames
            )));
        }
        if self.settle_epsilon <= 0.0 {
            return Err(ReelError::animation(format!(
                "spring config: settle_epsilon must be > 0 (got {})",
                self.settle_epsilon
            )));
        }
        Ok(())
    }
}

/// Damping class of a spring, from the sign of `damping² − 4·mass·stiffness`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Regime {
    /// Negative discriminant: decaying oscillation with overshoot.
    Underdamped,
    /// Zero discriminant: fastest approach without oscillation.
    CriticallyDamped,
    /// Positive discriminant: slow approach along two real exponentials.
    Overdamped,
}

// Coefficients of the deviation y = x - 1 with y(0) = -1, y'(0) = v0.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Solution {
    // x = 1 - e^(-decay t) (cos(wd t) + b sin(wd t))
    Under { decay: f64, omega_d: f64, b: f64 },
    // x = 1 - e^(-wn t) (1 + b t)
    Critical { omega_n: f64, b: f64 },
    // x = 1 + c1 e^(r1 t) + c2 e^(r2 t), r2 < r1 < 0
    Over { r1: f64, r2: f64, c1: f64, c2: f64 },
}

/// Closed-form spring evaluator.
///
/// Classification and coefficients are computed once in [`Spring::new`]; every query after
/// that is O(1) and depends only on its arguments, so frames can be evaluated in any order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    solution: Solution,
    // Seconds after activation from which |x - 1| <= settle_epsilon holds for good.
    settle_secs: Option<f64>,
}

impl Spring {
    /// Validate `config` and precompute the analytic solution.
    pub fn new(config: SpringConfig) -> ReelResult<Self> {
        config.validate()?;

        let SpringConfig {
            mass: m,
            stiffness: k,
            damping: c,
            initial_velocity: v0,
            ..
        } = config;

        let critical = 4.0 * m * k;
        let disc = c * c - critical;
        let solution = if disc.abs() <= critical * 1e-9 {
            let omega_n = (k / m).sqrt();
            Solution::Critical {
                omega_n,
                b: omega_n - v0,
            }
        } else if disc < 0.0 {
            let decay = c / (2.0 * m);
            let omega_d = (-disc).sqrt() / (2.0 * m);
            Solution::Under {
                decay,
                omega_d,
                b: (decay - v0) / omega_d,
            }
        } else {
            let decay = c / (2.0 * m);
            let spread = disc.sqrt() / (2.0 * m);
            let r1 = -decay + spread;
            let r2 = -decay - spread;
            let c1 = (v0 + r2) / (r1 - r2);
            Solution::Over {
                r1,
                r2,
                c1,
                c2: -1.0 - c1,
            }
        };

        let mut spring = Self {
            config,
            solution,
            settle_secs: None,
        };
        spring.settle_secs = spring.compute_settle_secs();
        tracing::debug!(
            regime = ?spring.regime(),
            settle_secs = ?spring.settle_secs,
            "spring classified"
        );
        Ok(spring)
    }

    /// Configuration the spring was built from.
    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Damping class selected at construction.
    pub fn regime(&self) -> Regime {
        match self.solution {
            Solution::Under { .. } => Regime::Underdamped,
            Solution::Critical { .. } => Regime::CriticallyDamped,
            Solution::Over { .. } => Regime::Overdamped,
        }
    }

    /// Displacement after `elapsed_frames` frames of the scene-local clock.
    ///
    /// Returns 0 before `delay_frames` and approaches 1 afterwards.
    pub fn evaluate(&self, elapsed_frames: f64, fps: Fps) -> f64 {
        if elapsed_frames.is_nan() || elapsed_frames < self.config.delay_frames {
            return 0.0;
        }
        let t = fps.frames_to_secs(elapsed_frames - self.config.delay_frames);
        let x = if t.is_finite() {
            self.displacement(t)
        } else {
            1.0
        };
        if self.config.overshoot_clamping {
            x.min(1.0)
        } else {
            x
        }
    }

    /// Map [`Spring::evaluate`] onto `from..to`.
    pub fn interpolate(&self, elapsed_frames: f64, fps: Fps, from: f64, to: f64) -> f64 {
        let x = self.evaluate(elapsed_frames, fps);
        from + (to - from) * x
    }

    /// `true` once the spring stays within `settle_epsilon` of 1 for every later frame.
    pub fn is_settled(&self, elapsed_frames: f64, fps: Fps) -> bool {
        let Some(settle) = self.settle_secs else {
            return false;
        };
        elapsed_frames >= self.config.delay_frames + settle * fps.as_f64()
    }

    /// First whole elapsed frame (delay included) from which the spring is settled.
    ///
    /// `None` for undamped springs, which oscillate forever.
    pub fn settle_frames(&self, fps: Fps) -> Option<u64> {
        let settle = self.settle_secs?;
        let frames = self.config.delay_frames + settle * fps.as_f64();
        Some(frames.ceil().max(0.0) as u64)
    }

    fn displacement(&self, t: f64) -> f64 {
        match self.solution {
            Solution::Under { decay, omega_d, b } => {
                let e = (-decay * t).exp();
                let (s, c) = (omega_d * t).sin_cos();
                1.0 - e * (c + b * s)
            }
            Solution::Critical { omega_n, b } => {
                let e = (-omega_n * t).exp();
                1.0 - e * (1.0 + b * t)
            }
            Solution::Over { r1, r2, c1, c2 } => 1.0 + c1 * (r1 * t).exp() + c2 * (r2 * t).exp(),
        }
    }

    // Upper bound of |x(t) - 1|, non-increasing for t >= envelope_peak().
    fn envelope(&self, t: f64) -> f64 {
        match self.solution {
            Solution::Under { decay, b, .. } => (1.0 + b * b).sqrt() * (-decay * t).exp(),
            Solution::Critical { omega_n, b } => (-omega_n * t).exp() * (1.0 + b.abs() * t),
            Solution::Over { r1, c1, c2, .. } => (c1.abs() + c2.abs()) * (r1 * t).exp(),
        }
    }

    fn envelope_peak(&self) -> f64 {
        match self.solution {
            Solution::Critical { omega_n, b } if b.abs() > omega_n => {
                (b.abs() - omega_n) / (omega_n * b.abs())
            }
            _ => 0.0,
        }
    }

    fn compute_settle_secs(&self) -> Option<f64> {
        let eps = self.config.settle_epsilon;
        match self.solution {
            Solution::Under { decay, b, .. } => {
                if decay <= 0.0 {
                    return None;
                }
                let amp = (1.0 + b * b).sqrt();
                Some(((amp / eps).ln() / decay).max(0.0))
            }
            Solution::Over { r1, c1, c2, .. } => {
                let amp = c1.abs() + c2.abs();
                Some(((amp / eps).ln() / -r1).max(0.0))
            }
            Solution::Critical { omega_n, .. } => {
                let start = self.envelope_peak();
                if self.envelope(start) <= eps {
                    return Some(start);
                }
                // Monotone past the peak: bracket, then bisect.
                let mut lo = start;
                let mut step = 1.0 / omega_n;
                let mut hi = start + step;
                let mut bracketed = false;
                for _ in 0..64 {
                    if self.envelope(hi) <= eps {
                        bracketed = true;
                        break;
                    }
                    lo = hi;
                    step *= 2.0;
                    hi = start + step;
                }
                if !bracketed {
                    return None;
                }
                for _ in 0..64 {
                    let mid = 0.5 * (lo + hi);
                    if self.envelope(mid) <= eps {
                        hi = mid;
                    } else {
                        lo = mid;
                    }
                }
                Some(hi)
            }
        }
    }
}

/// One-shot spring evaluation that validates `config` on every call.
pub fn evaluate(elapsed_frames: f64, config: &SpringConfig, fps: Fps) -> ReelResult<f64> {
    Ok(Spring::new(*config)?.evaluate(elapsed_frames, fps))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
