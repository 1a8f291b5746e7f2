//! Reusable building blocks for scene render functions.
//!
//! Every primitive is a pure function of the scene-local frame. Delays are expressed in
//! frames relative to the scene start, so a primitive behaves the same wherever its scene
//! lands on the global timeline.

use crate::{
    animation::{
        ease::Ease,
        interpolate::{Curve, InterpolateOptions},
        spring::{Spring, SpringConfig},
    },
    foundation::core::{Affine, Fps, Point, Rgba8Premul},
    foundation::error::ReelResult,
    scene::{model::Node, theme::Theme},
};

const SPINNER_GLYPHS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const CURSOR: char = '█';
const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';
const CURSOR_LINGER_FRAMES: f64 = 15.0;
const CURSOR_BLINK_FRAMES: i64 = 6;
// Monospace advance as a fraction of the font size.
const MONO_ADVANCE: f64 = 0.6;

/// Clamped ramp from `from` at `start` to `to` at `end`.
///
/// Degenerate windows (`end <= start`) step at `start`.
fn ramp(frame: i64, start: f64, end: f64, from: f64, to: f64, ease: Option<Ease>) -> f64 {
    let f = frame as f64;
    if start.is_nan() || end.is_nan() || end <= start {
        return if f >= start { to } else { from };
    }
    let mut options = InterpolateOptions::clamped();
    if let Some(e) = ease {
        options = options.with_easing(e);
    }
    Curve::<f64>::new([start, end], [from, to], options).map_or(to, |c| c.sample(f))
}

/// Top-left text origin for line `index` inside the theme's padding.
pub fn line_origin(theme: &Theme, index: usize) -> Point {
    Point::new(
        theme.padding_x,
        theme.padding_y + theme.line_advance() * index as f64,
    )
}

/// Typing progress of a [`typewriter`] line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypewriterState {
    /// Characters revealed so far.
    pub visible_chars: usize,
    /// Line opacity (fades in over one frame).
    pub opacity: f64,
    /// Whether the blinking cursor is drawn this frame.
    pub cursor_visible: bool,
}

/// Reveal `text` at `chars_per_frame` starting `delay` frames into the scene.
///
/// The cursor blinks while typing and for a short while after the last character.
pub fn typewriter(text: &str, delay: i64, chars_per_frame: f64, frame: i64) -> TypewriterState {
    let len = text.chars().count();
    let d = delay as f64;
    let typing = if chars_per_frame.is_finite() && chars_per_frame > 0.0 {
        len as f64 / chars_per_frame
    } else {
        0.0
    };
    let shown = ramp(frame, d, d + typing, 0.0, len as f64, None).floor();
    let visible_chars = (shown.max(0.0) as usize).min(len);
    let f = frame as f64;
    let cursor_visible = frame >= delay
        && f < d + typing + CURSOR_LINGER_FRAMES
        && frame.div_euclid(CURSOR_BLINK_FRAMES) % 2 == 0;
    TypewriterState {
        visible_chars,
        opacity: ramp(frame, d, d + 1.0, 0.0, 1.0, None),
        cursor_visible,
    }
}

/// Text node for a [`typewriter`] line in the theme's phosphor colour.
pub fn typewriter_node(
    text: &str,
    origin: Point,
    delay: i64,
    chars_per_frame: f64,
    frame: i64,
    theme: &Theme,
) -> Node {
    let state = typewriter(text, delay, chars_per_frame, frame);
    let mut shown: String = text.chars().take(state.visible_chars).collect();
    if state.cursor_visible {
        shown.push(CURSOR);
    }
    Node::text(shown, origin, theme.mono_size_px, theme.phosphor)
        .with_glow(theme.glow_px)
        .with_opacity(state.opacity)
}

/// Opacity of a line that fades in over two frames after `delay`.
pub fn fade_line(delay: i64, frame: i64) -> f64 {
    let d = delay as f64;
    ramp(frame, d, d + 2.0, 0.0, 1.0, None)
}

/// Text node for a [`fade_line`].
pub fn fade_line_node(
    text: &str,
    origin: Point,
    color: Rgba8Premul,
    delay: i64,
    frame: i64,
    theme: &Theme,
) -> Node {
    Node::text(text, origin, theme.mono_size_px, color)
        .with_glow(theme.glow_px)
        .with_opacity(fade_line(delay, frame))
}

/// Fill level of a [`progress_bar`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressState {
    /// Completion in `[0, 100]`.
    pub percent: f64,
    /// Filled cells out of the bar width.
    pub filled_cells: usize,
    /// Bar opacity (fades in over two frames).
    pub opacity: f64,
}

/// Progress filling linearly from `delay` to `delay + duration` over `cells` cells.
pub fn progress_bar(delay: i64, duration: i64, cells: usize, frame: i64) -> ProgressState {
    let d = delay as f64;
    let percent = ramp(frame, d, d + duration as f64, 0.0, 100.0, None);
    let filled = ((percent / 100.0) * cells as f64).floor().max(0.0) as usize;
    ProgressState {
        percent,
        filled_cells: filled.min(cells),
        opacity: ramp(frame, d, d + 2.0, 0.0, 1.0, None),
    }
}

/// Labelled 30-cell text progress bar with a percentage readout.
pub fn progress_bar_node(
    label: &str,
    origin: Point,
    delay: i64,
    duration: i64,
    frame: i64,
    theme: &Theme,
) -> Node {
    const CELLS: usize = 30;
    let state = progress_bar(delay, duration, CELLS, frame);
    let advance = theme.mono_size_px * MONO_ADVANCE;

    let label = format!("{label} ");
    let bar: String = std::iter::repeat_n(BAR_FILLED, state.filled_cells)
        .chain(std::iter::repeat_n(BAR_EMPTY, CELLS - state.filled_cells))
        .collect();
    let bar_x = origin.x + advance * label.chars().count() as f64;
    let pct_x = bar_x + advance * CELLS as f64;

    Node::group(vec![
        Node::text(label, origin, theme.mono_size_px, theme.dim),
        Node::text(
            bar,
            Point::new(bar_x, origin.y),
            theme.mono_size_px,
            theme.phosphor,
        )
        .with_glow(theme.glow_px * 0.75),
        Node::text(
            format!(" {}%", state.percent.floor()),
            Point::new(pct_x, origin.y),
            theme.mono_size_px,
            theme.phosphor_dim,
        ),
    ])
    .with_opacity(state.opacity)
}

/// Number counting from `from` to `to` with an ease-out, starting at `delay`.
pub fn counter(from: f64, to: f64, delay: i64, duration: i64, frame: i64) -> f64 {
    let d = delay as f64;
    ramp(frame, d, d + duration as f64, from, to, Some(Ease::OutQuad))
}

/// Format `value` with `decimals` fraction digits and comma thousands separators.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    if value.is_sign_negative() && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        out.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if let Some(f) = frac_part {
        out.push('.');
        out.push_str(f);
    }
    out
}

/// State of a [`spinner`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinnerState {
    /// Braille frame while running, a check mark once done.
    pub glyph: char,
    /// `true` from `delay + duration` on.
    pub done: bool,
    /// Fades in over one frame.
    pub opacity: f64,
}

/// Braille spinner advancing every two frames until `delay + duration`.
pub fn spinner(delay: i64, duration: i64, frame: i64) -> SpinnerState {
    let done = frame >= delay.saturating_add(duration);
    let step = ((frame - delay) as f64 * 0.5).floor() as i64;
    let glyph = if done {
        '✓'
    } else {
        SPINNER_GLYPHS[step.rem_euclid(SPINNER_GLYPHS.len() as i64) as usize]
    };
    let d = delay as f64;
    SpinnerState {
        glyph,
        done,
        opacity: ramp(frame, d, d + 1.0, 0.0, 1.0, None),
    }
}

/// Spring used by [`pop_in`]: snappy, with slight overshoot.
pub fn pop_in_spring(delay: i64) -> ReelResult<Spring> {
    Spring::new(
        SpringConfig::default()
            .with_stiffness_damping(200.0, 15.0)
            .delayed(delay.max(0) as f64),
    )
}

/// Scale factor of a pop-in at `frame`: 0 before the delay, settling at 1.
pub fn pop_in(spring: &Spring, frame: i64, fps: Fps) -> f64 {
    spring.evaluate(frame as f64, fps)
}

/// Scale `node` about `center` by `scale`.
pub fn pop_in_node(node: Node, center: Point, scale: f64) -> Node {
    let about = Affine::translate(center.to_vec2())
        * Affine::scale(scale)
        * Affine::translate(-center.to_vec2());
    node.with_transform(about)
}

/// Brightness multiplier of a CRT screen: two beating sines around 0.97.
pub fn crt_flicker(frame: i64) -> f64 {
    let f = frame as f64;
    0.97 + (f * 0.3).sin() * 0.015 + (f * 7.1).sin() * 0.008
}

#[cfg(test)]
#[path = "../../tests/unit/scene/primitives.rs"]
mod tests;
