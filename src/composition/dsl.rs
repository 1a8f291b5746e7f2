use std::sync::Arc;

use crate::{
    effects::transitions::Transition,
    eval::clock::{Composition, Scene, SceneCtx, SceneRender},
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    scene::{model::VisualState, theme::Theme},
};

/// Fluent builder for a [`Composition`].
///
/// Scenes and transitions are added in playback order. Two scenes added back to back with no
/// transition between them are joined by a hard cut. All validation happens in
/// [`CompositionBuilder::build`].
pub struct CompositionBuilder {
    fps: Fps,
    canvas: Canvas,
    theme: Theme,
    scenes: Vec<Scene>,
    transitions: Vec<Transition>,
    pending: Option<Transition>,
    misuse: Option<String>,
}

impl CompositionBuilder {
    /// Start an empty composition.
    pub fn new(fps: Fps, canvas: Canvas) -> Self {
        Self {
            fps,
            canvas,
            theme: Theme::default(),
            scenes: Vec::new(),
            transitions: Vec::new(),
            pending: None,
            misuse: None,
        }
    }

    /// Replace the default theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Append a scene rendered by a closure.
    pub fn scene<F>(self, id: impl Into<String>, duration_frames: u32, render: F) -> Self
    where
        F: Fn(i64, &SceneCtx<'_>) -> VisualState + Send + Sync + 'static,
    {
        self.scene_shared(id, duration_frames, Arc::new(render))
    }

    /// Append a scene whose render function is shared with other compositions.
    pub fn scene_shared(
        mut self,
        id: impl Into<String>,
        duration_frames: u32,
        render: Arc<dyn SceneRender>,
    ) -> Self {
        if !self.scenes.is_empty() {
            let t = self.pending.take().unwrap_or_else(Transition::cut);
            self.transitions.push(t);
        }
        self.scenes.push(Scene::new(id, duration_frames, render));
        self
    }

    /// Join the previous scene to the next one with `transition`.
    pub fn transition(mut self, transition: Transition) -> Self {
        if self.misuse.is_none() {
            if self.scenes.is_empty() {
                self.misuse = Some("transition added before the first scene".to_string());
            } else if self.pending.is_some() {
                self.misuse = Some(format!(
                    "two transitions in a row after scene '{}'",
                    self.scenes[self.scenes.len() - 1].id
                ));
            }
        }
        self.pending = Some(transition);
        self
    }

    /// Validate everything and build the composition.
    #[tracing::instrument(skip_all, fields(scenes = self.scenes.len()))]
    pub fn build(self) -> ReelResult<Composition> {
        if let Some(msg) = self.misuse {
            return Err(ReelError::validation(msg));
        }
        if self.pending.is_some() {
            return Err(ReelError::validation(
                "transition added after the last scene",
            ));
        }
        Composition::new(
            self.fps,
            self.canvas,
            self.theme,
            self.scenes,
            self.transitions,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/dsl.rs"]
mod tests;
