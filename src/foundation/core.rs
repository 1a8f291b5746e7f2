use crate::foundation::error::{ReelError, ReelResult};

pub use kurbo::{Affine, Point, Rect, Vec2};

/// Half-open range of global frames, `start..end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame (inclusive).
    pub start: i64,
    /// One past the last frame.
    pub end: i64, // exclusive
}

impl FrameRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: i64, end: i64) -> ReelResult<Self> {
        if start > end {
            return Err(ReelError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames covered.
    pub fn len_frames(self) -> u64 {
        self.end.abs_diff(self.start)
    }

    /// `true` when the range covers no frames.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// `true` when `f` lies in `start..end`.
    pub fn contains(self, f: i64) -> bool {
        self.start <= f && f < self.end
    }

    /// Iterate the frames of the range in order.
    pub fn frames(self) -> std::ops::Range<i64> {
        self.start..self.end
    }
}

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Frames per `den` seconds.
    pub num: u32,
    /// Must be > 0.
    pub den: u32,
}

impl Fps {
    /// Create a frame rate; both parts must be non-zero.
    pub fn new(num: u32, den: u32) -> ReelResult<Self> {
        if den == 0 {
            return Err(ReelError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ReelError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert a (possibly fractional) frame count to seconds.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames * self.frame_duration_secs()
    }

    /// Convert seconds to whole frames, rounding down and saturating at zero.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Full-canvas rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red, premultiplied.
    pub r: u8,
    /// Green, premultiplied.
    pub g: u8,
    /// Blue, premultiplied.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Fully opaque colour; premultiplication is a no-op at alpha 255.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Premultiply a straight-alpha colour.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: crate::foundation::math::mul_div255_u8(u16::from(r), u16::from(a)),
            g: crate::foundation::math::mul_div255_u8(u16::from(g), u16::from(a)),
            b: crate::foundation::math::mul_div255_u8(u16::from(b), u16::from(a)),
            a,
        }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (straight alpha).
    pub fn from_hex(s: &str) -> ReelResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let well_formed =
            (hex.len() == 6 || hex.len() == 8) && hex.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return Err(ReelError::validation(format!(
                "colour '{s}' must be #rrggbb or #rrggbbaa"
            )));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| ReelError::validation(format!("colour '{s}' is not valid hex")))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::from_straight_rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
