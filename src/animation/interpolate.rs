use crate::{
    animation::ease::Ease,
    foundation::core::{Rgba8Premul, Vec2},
    foundation::error::{ReelError, ReelResult},
};

/// Values a [`Curve`] can interpolate between.
pub trait Lerp: Sized + Clone {
    /// Blend `a` toward `b`. `t` may leave `[0, 1]` when a curve extrapolates.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// Value produced by [`Extrapolate::Identity`]; `None` falls back to clamping.
    fn from_input(_frame: f64) -> Option<Self> {
        None
    }

    /// Whether a value may appear in a keyframe set.
    fn is_valid_keyframe(&self) -> bool {
        true
    }
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // Exact at both endpoints and on flat segments.
        if t == 1.0 { *b } else { a + (b - a) * t }
    }

    fn from_input(frame: f64) -> Option<Self> {
        Some(frame)
    }

    fn is_valid_keyframe(&self) -> bool {
        self.is_finite()
    }
}

impl Lerp for f32 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        <f64 as Lerp>::lerp(&f64::from(*a), &f64::from(*b), t) as f32
    }

    fn from_input(frame: f64) -> Option<Self> {
        Some(frame as f32)
    }

    fn is_valid_keyframe(&self) -> bool {
        self.is_finite()
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }

    fn is_valid_keyframe(&self) -> bool {
        self.is_finite()
    }
}

impl Lerp for Rgba8Premul {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(a.r, b.r, t),
            g: lerp_u8(a.g, b.g, t),
            b: lerp_u8(a.b, b.b, t),
            a: lerp_u8(a.a, b.a, t),
        }
    }
}

/// Policy for frames outside the keyframe input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Hold the boundary value.
    #[default]
    Clamp,
    /// Continue the boundary segment's slope.
    Extend,
    /// Return the input frame itself (numeric curves only).
    Identity,
}

/// Easing and extrapolation settings for a [`Curve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOptions {
    /// Applied to each segment's normalized progress.
    #[serde(default)]
    pub easing: Option<Ease>,
    /// Policy below the first input frame.
    #[serde(default)]
    pub extrapolate_left: Extrapolate,
    /// Policy above the last input frame.
    #[serde(default)]
    pub extrapolate_right: Extrapolate,
}

impl InterpolateOptions {
    /// Clamp on both sides, no easing.
    pub fn clamped() -> Self {
        Self::default()
    }

    /// Replace the easing function.
    pub fn with_easing(mut self, easing: Ease) -> Self {
        self.easing = Some(easing);
        self
    }

    /// Use `policy` on both sides.
    pub fn extrapolate(mut self, policy: Extrapolate) -> Self {
        self.extrapolate_left = policy;
        self.extrapolate_right = policy;
        self
    }
}

/// Validated piecewise keyframe curve.
///
/// Construction checks the keyframe set once; [`Curve::sample`] is then total over every
/// frame, including frames far outside the input range.
#[derive(Clone, Debug, PartialEq)]
pub struct Curve<T> {
    input: Vec<f64>,
    output: Vec<T>,
    options: InterpolateOptions,
}

impl<T: Lerp> Curve<T> {
    /// Validate and build a curve from parallel input/output ranges.
    pub fn new(
        input: impl Into<Vec<f64>>,
        output: impl Into<Vec<T>>,
        options: InterpolateOptions,
    ) -> ReelResult<Self> {
        let input = input.into();
        let output = output.into();

        if input.len() != output.len() {
            return Err(ReelError::animation(format!(
                "keyframe input range has {} entries but output range has {}",
                input.len(),
                output.len()
            )));
        }
        if input.len() < 2 {
            return Err(ReelError::animation(
                "keyframe ranges need at least two entries",
            ));
        }
        if let Some(i) = input.iter().position(|v| !v.is_finite()) {
            return Err(ReelError::animation(format!(
                "keyframe input[{i}] must be finite"
            )));
        }
        if let Some(i) = output.iter().position(|v| !v.is_valid_keyframe()) {
            return Err(ReelError::animation(format!(
                "keyframe output[{i}] must be finite"
            )));
        }
        if let Some(i) = input.windows(2).position(|w| w[0] >= w[1]) {
            return Err(ReelError::animation(format!(
                "keyframe input range must be strictly increasing (input[{}] = {} >= input[{}] = {})",
                i,
                input[i],
                i + 1,
                input[i + 1]
            )));
        }
        if let Some(ease) = options.easing {
            ease.validate()?;
        }

        Ok(Self {
            input,
            output,
            options,
        })
    }

    /// Input frames of the keyframe set.
    pub fn input(&self) -> &[f64] {
        &self.input
    }

    /// Output values of the keyframe set.
    pub fn output(&self) -> &[T] {
        &self.output
    }

    /// Options the curve was built with.
    pub fn options(&self) -> InterpolateOptions {
        self.options
    }

    /// Evaluate the curve at `frame`.
    pub fn sample(&self, frame: f64) -> T {
        let n = self.input.len();
        let first = self.input[0];
        let last = self.input[n - 1];

        if frame.is_nan() {
            return self.output[0].clone();
        }
        if frame < first {
            return self.outside(frame, self.options.extrapolate_left, 0, &self.output[0]);
        }
        if frame > last {
            return self.outside(
                frame,
                self.options.extrapolate_right,
                n - 2,
                &self.output[n - 1],
            );
        }

        let idx = self.input.partition_point(|x| *x <= frame);
        let seg = idx.saturating_sub(1).min(n - 2);
        let t = self.segment_progress(seg, frame);
        let te = match self.options.easing {
            Some(ease) => ease.apply(t),
            None => t,
        };
        T::lerp(&self.output[seg], &self.output[seg + 1], te)
    }

    fn outside(&self, frame: f64, policy: Extrapolate, seg: usize, boundary: &T) -> T {
        match policy {
            Extrapolate::Clamp => boundary.clone(),
            Extrapolate::Identity => T::from_input(frame).unwrap_or_else(|| boundary.clone()),
            Extrapolate::Extend => {
                // Infinite frames would turn the slope into NaN.
                if !frame.is_finite() {
                    return boundary.clone();
                }
                let t = self.segment_progress(seg, frame);
                T::lerp(&self.output[seg], &self.output[seg + 1], t)
            }
        }
    }

    fn segment_progress(&self, seg: usize, frame: f64) -> f64 {
        let a = self.input[seg];
        let b = self.input[seg + 1];
        (frame - a) / (b - a)
    }
}

/// One-shot numeric interpolation.
///
/// Validates the ranges on every call; scenes that sample the same keyframes every frame
/// should build a [`Curve`] once instead.
pub fn interpolate(
    frame: f64,
    input_range: &[f64],
    output_range: &[f64],
    options: InterpolateOptions,
) -> ReelResult<f64> {
    Ok(Curve::<f64>::new(input_range, output_range, options)?.sample(frame))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
