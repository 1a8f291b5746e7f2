//! Scene-side building blocks: the visual state handed to rasterizers, the shared theme, and
//! reusable primitives for render functions.

/// Layers and nodes produced by scene render functions.
pub mod model;
/// Frame-driven helpers for terminal-style scenes.
pub mod primitives;
/// Palette and text metrics shared by every scene.
pub mod theme;
