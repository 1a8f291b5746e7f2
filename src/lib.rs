//! Reel is a deterministic frame-composition substrate for programmatic video.
//!
//! It maps an integer global frame to a fully specified, renderer-agnostic
//! [`VisualState`]. Rasterization, fonts and encoding are left to the caller.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: `global frame -> Resolved` via the [`Timeline`] (one scene, or two scenes
//!    plus blend progress inside a transition window)
//! 2. **Render scenes**: each active scene's [`SceneRender`] turns its local frame into a
//!    [`VisualState`], typically using [`Curve`]s, [`Spring`]s and the primitives in [`scene`]
//! 3. **Composite**: [`composite`] blends outgoing and incoming states with the transition's
//!    [`Presentation`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Random access**: any frame renders in isolation, in any order, on any thread.
//! - **Closed-form springs**: spring motion never depends on previously evaluated frames.
//! - **Explicit configuration**: themes, spring configs and interpolation options are plain
//!   values passed in, never globals.
//!
//! See [`crate::guide`] for a standalone walkthrough.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod composition;
mod effects;
mod eval;
mod foundation;
mod render;
mod timeline;

/// High-level, standalone documentation for reel's concepts and architecture.
pub mod guide;
/// Visual state model, theme and reusable scene primitives.
pub mod scene;

pub use animation::ease::Ease;
pub use animation::interpolate::{Curve, Extrapolate, InterpolateOptions, Lerp, interpolate};
pub use animation::spring::{Regime, Spring, SpringConfig};
pub use composition::dsl::CompositionBuilder;
pub use composition::model::{SceneDecl, SceneRegistry, SequenceDecl, TransitionDecl};
pub use effects::composite::composite;
pub use effects::transitions::{
    Presentation, SlideDirection, Transition, parse_direction, parse_presentation,
    parse_transition,
};
pub use eval::clock::{Composition, Scene, SceneCtx, SceneRender};
pub use eval::fingerprint::{FrameFingerprint, fingerprint_resolved, fingerprint_state};
pub use foundation::core::{Affine, Canvas, Fps, FrameRange, Point, Rect, Rgba8Premul, Vec2};
pub use foundation::error::{ReelError, ReelResult};
pub use render::pipeline::{
    RenderStats, RenderThreading, render_frame, render_frames, render_frames_with_stats,
};
pub use scene::model::{Layer, Node, VisualState};
pub use scene::theme::Theme;
pub use timeline::sequence::{ActiveScene, Blend, Resolved, SceneSlot, Timeline};

/// One-shot spring evaluation, see [`Spring`].
pub use animation::spring::evaluate as spring;
