use crate::foundation::core::Rgba8Premul;

/// Immutable style shared by every scene of a composition.
///
/// The default is a green-phosphor terminal palette. Scenes receive the theme through
/// [`SceneCtx`](crate::SceneCtx) instead of reaching for global constants.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Screen background.
    pub background: Rgba8Premul,
    /// Primary text colour.
    pub phosphor: Rgba8Premul,
    /// Secondary text (labels, pending items).
    pub phosphor_dim: Rgba8Premul,
    /// Highlights and big numbers.
    pub phosphor_bright: Rgba8Premul,
    /// Warnings.
    pub amber: Rgba8Premul,
    /// Muted warnings.
    pub amber_dim: Rgba8Premul,
    /// Errors and losses.
    pub red: Rgba8Premul,
    /// Neutral body text.
    pub white: Rgba8Premul,
    /// Borders and empty progress cells.
    pub dim: Rgba8Premul,
    /// Links and accents.
    pub cyan: Rgba8Premul,
    /// Default monospace font size in pixels.
    pub mono_size_px: f64,
    /// Line advance as a multiple of the font size.
    pub line_height: f64,
    /// Default text glow radius in pixels.
    pub glow_px: f64,
    /// Horizontal content inset in pixels.
    pub padding_x: f64,
    /// Vertical content inset in pixels.
    pub padding_y: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgba8Premul::opaque(0x02, 0x0a, 0x02),
            phosphor: Rgba8Premul::opaque(0x33, 0xff, 0x33),
            phosphor_dim: Rgba8Premul::opaque(0x1a, 0x8a, 0x1a),
            phosphor_bright: Rgba8Premul::opaque(0x88, 0xff, 0x88),
            amber: Rgba8Premul::opaque(0xff, 0xb8, 0x30),
            amber_dim: Rgba8Premul::opaque(0x99, 0x6d, 0x1a),
            red: Rgba8Premul::opaque(0xff, 0x33, 0x33),
            white: Rgba8Premul::opaque(0xcc, 0xdd, 0xcc),
            dim: Rgba8Premul::opaque(0x2a, 0x5a, 0x2a),
            cyan: Rgba8Premul::opaque(0x33, 0xff, 0xee),
            mono_size_px: 17.0,
            line_height: 1.5,
            glow_px: 8.0,
            padding_x: 70.0,
            padding_y: 60.0,
        }
    }
}

impl Theme {
    /// Vertical distance between consecutive text lines.
    pub fn line_advance(&self) -> f64 {
        self.mono_size_px * self.line_height
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/theme.rs"]
mod tests;
