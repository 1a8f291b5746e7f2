//! # Reel guide
//!
//! A standalone walkthrough of reel's model and public API. Start here if you are writing scenes
//! or wiring reel into a renderer.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Composition`](crate::Composition): validated timeline plus one render function per scene
//! - [`Timeline`](crate::Timeline): scenes laid end to end, overlapping by their transitions
//! - [`SceneRender`](crate::SceneRender): pure `local frame -> VisualState` function
//! - [`VisualState`](crate::VisualState): layers of text, rects and groups for an external
//!   rasterizer
//! - [`Transition`](crate::Transition): overlap length, [`Presentation`](crate::Presentation)
//!   and progress [`Ease`](crate::Ease)
//!
//! Rendering one frame is explicitly staged:
//!
//! 1. Resolve: [`Timeline::resolve`](crate::Timeline::resolve)
//! 2. Render the active scene(s) at their local frames
//! 3. Composite: [`composite`](crate::composite)
//!
//! [`Composition::render`](crate::Composition::render) runs all three.
//!
//! ---
//!
//! ## Timeline arithmetic
//!
//! Scene `i` starts at `start[i] = start[i-1] + duration[i-1] - overlap[i-1]`, with
//! `start[0] = 0`. The sequence is `sum(duration) - sum(overlap)` frames long.
//!
//! Inside the window `start[i] .. start[i] + overlap[i-1]` both scenes are active. Each gets its
//! own local frame, and blend progress runs `(frame - start[i]) / overlap[i-1]` from 0 up to (but
//! never reaching) 1. Two scenes of 75 and 180 frames joined by an 8-frame fade give:
//!
//! | global frame | active (scene, local)    | progress |
//! |--------------|--------------------------|----------|
//! | 66           | (0, 66)                  | none     |
//! | 67           | (0, 67), (1, 0)          | 0.0      |
//! | 72           | (0, 72), (1, 5)          | 0.625    |
//! | 75           | (1, 8)                   | none     |
//! | 246          | (1, 179)                 | none     |
//!
//! Frames below 0 show the first scene's first frame; frames at or past the end show the last
//! scene's last frame. A middle scene must be at least as long as its two overlaps combined, so
//! no frame ever has three scenes active.
//!
//! ---
//!
//! ## Writing a scene
//!
//! ```
//! use reel::{CompositionBuilder, Canvas, Fps, SceneCtx, Transition, VisualState};
//! use reel::scene::primitives::{line_origin, typewriter_node};
//!
//! let comp = CompositionBuilder::new(Fps::new(30, 1)?, Canvas { width: 1080, height: 1080 })
//!     .scene("boot", 75, |f, ctx: &SceneCtx<'_>| {
//!         VisualState::single_layer(
//!             "boot",
//!             vec![typewriter_node("> booting", line_origin(ctx.theme, 0), 5, 2.0, f, ctx.theme)],
//!         )
//!     })
//!     .transition(Transition::fade(8))
//!     .scene("burn", 180, |_, _: &SceneCtx<'_>| VisualState::default())
//!     .build()?;
//!
//! assert_eq!(comp.total_frames(), 247);
//! let frame = comp.render(72);
//! assert_eq!(frame.layers[0].opacity, 0.375);
//! # Ok::<(), reel::ReelError>(())
//! ```
//!
//! Scenes must be pure: everything they draw is a function of the local frame and the
//! [`SceneCtx`](crate::SceneCtx). Delays inside a scene are plain frame offsets.
//!
//! ---
//!
//! ## Keyframes
//!
//! [`Curve`](crate::Curve) validates a keyframe set once and samples it for any frame.
//! Inputs must be finite and strictly increasing. Outside the input range each side follows its
//! [`Extrapolate`](crate::Extrapolate) policy:
//!
//! - `Clamp` (default): hold the boundary value
//! - `Extend`: continue the boundary segment's slope, without easing
//! - `Identity`: return the frame itself (numeric curves only)
//!
//! [`interpolate`](crate::interpolate) is the one-shot numeric form.
//!
//! ---
//!
//! ## Springs
//!
//! [`Spring`](crate::Spring) is a damped harmonic oscillator solved in closed form. It classifies
//! the config as under-, critically or over-damped once, then evaluates any elapsed frame in
//! O(1). Displacement is 0 until `delay_frames`, then settles toward 1.
//! [`Spring::settle_frames`](crate::Spring::settle_frames) tells you when it stays within
//! `settle_epsilon` of 1 for good.
//!
//! ---
//!
//! ## Transitions
//!
//! - `Fade`: outgoing opacity scales by `1 - p`, incoming by `p`
//! - `Slide(dir)`: incoming enters from `dir`, outgoing leaves by the opposite edge
//! - `Wipe(dir)`: incoming is clipped to a rectangle growing from `dir`
//!
//! Progress `<= 0` returns the outgoing state unchanged, `>= 1` the incoming one. Incoming
//! layers always draw above outgoing ones.
//!
//! ---
//!
//! ## Declarations
//!
//! [`SequenceDecl`](crate::SequenceDecl) is the JSON form of a sequence:
//!
//! ```json
//! {
//!   "scenes": [
//!     { "id": "boot", "duration_frames": 75 },
//!     { "id": "burn", "duration_frames": 180 }
//!   ],
//!   "transitions": [
//!     { "presentation": "slide", "direction": "from-right", "overlap_frames": 8, "ease": "out_cubic" }
//!   ]
//! }
//! ```
//!
//! Scene ids are looked up in a [`SceneRegistry`](crate::SceneRegistry) by
//! [`SequenceDecl::build`](crate::SequenceDecl::build). `fps`, `canvas` and `theme` are optional
//! and default to 30 fps, 1080x1080 and the phosphor palette.
//!
//! ---
//!
//! ## Rendering ranges
//!
//! [`render_frames_with_stats`](crate::render_frames_with_stats) renders a
//! [`FrameRange`](crate::FrameRange) in chunks. With
//! [`RenderThreading::parallel`](crate::RenderThreading::parallel) each chunk runs on a
//! dedicated rayon pool. With `static_frame_elision`, frames that resolve to the same timeline
//! position within a chunk are rendered once and cloned. Output is identical either way.
//!
//! ---
//!
//! ## Logging
//!
//! reel emits `tracing` spans and events (timeline construction, spring classification, range
//! rendering) but never installs a subscriber.
