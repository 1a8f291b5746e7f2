use std::sync::Arc;

use crate::{
    effects::composite::composite,
    effects::transitions::Transition,
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    scene::{model::VisualState, theme::Theme},
    timeline::sequence::{ActiveScene, Resolved, SceneSlot, Timeline},
};

/// Read-only context handed to every scene render call.
#[derive(Clone, Copy, Debug)]
pub struct SceneCtx<'a> {
    /// Composition frame rate.
    pub fps: Fps,
    /// Output canvas.
    pub canvas: Canvas,
    /// Shared style.
    pub theme: &'a Theme,
}

/// Pure function from a scene-local frame to that scene's visual state.
///
/// Implementations must not keep state between calls: the same `local_frame` has to produce
/// the same result no matter which frames were rendered before, or on which thread.
pub trait SceneRender: Send + Sync {
    /// Render the scene at `local_frame` (0 is the scene's first frame).
    fn render(&self, local_frame: i64, ctx: &SceneCtx<'_>) -> VisualState;
}

impl<F> SceneRender for F
where
    F: Fn(i64, &SceneCtx<'_>) -> VisualState + Send + Sync,
{
    fn render(&self, local_frame: i64, ctx: &SceneCtx<'_>) -> VisualState {
        self(local_frame, ctx)
    }
}

/// A registered scene: id, length and render function.
#[derive(Clone)]
pub struct Scene {
    /// Unique id, stamped on layers that leave `scene_id` empty.
    pub id: String,
    /// Length in frames, at least 1.
    pub duration_frames: u32,
    /// Shared render function.
    pub render: Arc<dyn SceneRender>,
}

impl Scene {
    /// Build a scene from a shared render function.
    pub fn new(id: impl Into<String>, duration_frames: u32, render: Arc<dyn SceneRender>) -> Self {
        Self {
            id: id.into(),
            duration_frames,
            render,
        }
    }

    /// Build a scene from a closure.
    pub fn from_fn<F>(id: impl Into<String>, duration_frames: u32, render: F) -> Self
    where
        F: Fn(i64, &SceneCtx<'_>) -> VisualState + Send + Sync + 'static,
    {
        Self::new(id, duration_frames, Arc::new(render))
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("id", &self.id)
            .field("duration_frames", &self.duration_frames)
            .finish_non_exhaustive()
    }
}

/// Composition root: a validated timeline plus the render function of each scene.
///
/// [`Composition::render`] is a pure function of the global frame. The composition is
/// `Send + Sync`, so frames may be rendered from any number of threads in any order.
#[derive(Clone)]
pub struct Composition {
    fps: Fps,
    canvas: Canvas,
    theme: Theme,
    timeline: Timeline,
    renders: Vec<Arc<dyn SceneRender>>,
}

impl Composition {
    /// Validate and assemble a composition.
    ///
    /// `transitions[i]` joins `scenes[i]` and `scenes[i + 1]`.
    pub fn new(
        fps: Fps,
        canvas: Canvas,
        theme: Theme,
        scenes: Vec<Scene>,
        transitions: Vec<Transition>,
    ) -> ReelResult<Self> {
        Fps::new(fps.num, fps.den)?;
        if canvas.width == 0 || canvas.height == 0 {
            return Err(ReelError::validation(format!(
                "canvas must be non-empty (got {}x{})",
                canvas.width, canvas.height
            )));
        }

        let (slots, renders): (Vec<SceneSlot>, Vec<Arc<dyn SceneRender>>) = scenes
            .into_iter()
            .map(|s| (SceneSlot::new(s.id, s.duration_frames), s.render))
            .unzip();
        let timeline = Timeline::new(slots, transitions)?;

        Ok(Self {
            fps,
            canvas,
            theme,
            timeline,
            renders,
        })
    }

    /// Frame rate.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Shared style.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Underlying timeline.
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Length of the composition in frames.
    pub fn total_frames(&self) -> i64 {
        self.timeline.total_frames()
    }

    /// Which scene(s) `frame` maps to.
    pub fn resolve(&self, frame: i64) -> Resolved {
        self.timeline.resolve(frame)
    }

    /// Visual state at global `frame`.
    ///
    /// Frames before 0 or past the end show the first or last frame of the sequence.
    pub fn render(&self, frame: i64) -> VisualState {
        self.render_resolved(&self.timeline.resolve(frame))
    }

    pub(crate) fn render_resolved(&self, resolved: &Resolved) -> VisualState {
        let ctx = SceneCtx {
            fps: self.fps,
            canvas: self.canvas,
            theme: &self.theme,
        };

        match (resolved.active.as_slice(), resolved.blend) {
            ([outgoing, incoming], Some(blend)) => {
                let transition = &self.timeline.transitions()[blend.transition_index];
                let a = self.render_scene(*outgoing, &ctx);
                let b = self.render_scene(*incoming, &ctx);
                let progress = transition.ease.apply(blend.progress);
                composite(&a, &b, progress, transition.presentation, self.canvas)
            }
            ([only, ..], _) => self.render_scene(*only, &ctx),
            ([], _) => VisualState::default(),
        }
    }

    fn render_scene(&self, active: ActiveScene, ctx: &SceneCtx<'_>) -> VisualState {
        let mut state = self.renders[active.scene_index].render(active.local_frame, ctx);
        let id = &self.timeline.scenes()[active.scene_index].id;
        for layer in &mut state.layers {
            if layer.scene_id.is_empty() {
                layer.scene_id.clone_from(id);
            }
        }
        state
    }
}

impl std::fmt::Debug for Composition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composition")
            .field("fps", &self.fps)
            .field("canvas", &self.canvas)
            .field("timeline", &self.timeline)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/clock.rs"]
mod tests;
