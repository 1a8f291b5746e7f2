use std::{collections::BTreeMap, sync::Arc};

use crate::{
    animation::ease::Ease,
    effects::transitions::{Transition, parse_transition},
    eval::clock::{Composition, Scene, SceneCtx, SceneRender},
    foundation::core::{Canvas, Fps},
    foundation::error::{ReelError, ReelResult},
    scene::{model::VisualState, theme::Theme},
    timeline::sequence::{SceneSlot, Timeline},
};

/// Serializable description of a scene sequence.
///
/// Scenes are referenced by id and resolved against a [`SceneRegistry`] when the
/// composition is built, so the same declaration can drive different render functions.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SequenceDecl {
    /// Frame rate (defaults to 30 fps).
    #[serde(default = "default_fps")]
    pub fps: Fps,
    /// Output canvas (defaults to 1080x1080).
    #[serde(default = "default_canvas")]
    pub canvas: Canvas,
    /// Shared style (defaults to the phosphor palette).
    #[serde(default)]
    pub theme: Theme,
    /// Scenes in playback order.
    pub scenes: Vec<SceneDecl>,
    /// `transitions[i]` joins `scenes[i]` and `scenes[i + 1]`. Left empty, every pair is
    /// joined by a hard cut.
    #[serde(default)]
    pub transitions: Vec<TransitionDecl>,
}

/// One entry of [`SequenceDecl::scenes`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneDecl {
    /// Registry key of the render function.
    pub id: String,
    /// Length in frames, at least 1.
    pub duration_frames: u32,
}

/// One entry of [`SequenceDecl::transitions`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransitionDecl {
    /// `"fade"`, `"slide"` or `"wipe"`.
    pub presentation: String,
    /// `from-left` (default), `from-right`, `from-top` or `from-bottom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Frames both scenes share.
    pub overlap_frames: u32,
    /// Progress easing, linear when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ease: Option<Ease>,
}

fn default_fps() -> Fps {
    Fps { num: 30, den: 1 }
}

fn default_canvas() -> Canvas {
    Canvas {
        width: 1080,
        height: 1080,
    }
}

impl SequenceDecl {
    /// Parse a JSON declaration.
    pub fn from_json(s: &str) -> ReelResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ReelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the declaration on its own, without a registry.
    pub fn validate(&self) -> ReelResult<()> {
        self.timeline().map(|_| ())
    }

    /// Timeline described by the declaration.
    pub fn timeline(&self) -> ReelResult<Timeline> {
        let slots = self
            .scenes
            .iter()
            .map(|s| SceneSlot::new(s.id.clone(), s.duration_frames))
            .collect();
        let transitions = if self.transitions.is_empty() {
            vec![Transition::cut(); self.scenes.len().saturating_sub(1)]
        } else {
            self.transitions
                .iter()
                .enumerate()
                .map(|(i, t)| {
                    parse_transition(t)
                        .map_err(|e| ReelError::validation(format!("transition {i}: {e}")))
                })
                .collect::<ReelResult<Vec<_>>>()?
        };
        Timeline::new(slots, transitions)
    }

    /// Resolve scene ids against `registry` and build the composition.
    #[tracing::instrument(skip_all, fields(scenes = self.scenes.len()))]
    pub fn build(&self, registry: &SceneRegistry) -> ReelResult<Composition> {
        let timeline = self.timeline()?;

        let scenes = self
            .scenes
            .iter()
            .enumerate()
            .map(|(i, decl)| {
                let render = registry.get(&decl.id).ok_or_else(|| {
                    ReelError::validation(format!(
                        "scene '{}' (index {i}) is not registered",
                        decl.id
                    ))
                })?;
                Ok(Scene::new(decl.id.clone(), decl.duration_frames, render))
            })
            .collect::<ReelResult<Vec<_>>>()?;

        Composition::new(
            self.fps,
            self.canvas,
            self.theme.clone(),
            scenes,
            timeline.transitions().to_vec(),
        )
    }
}

/// Render functions keyed by scene id.
#[derive(Clone, Default)]
pub struct SceneRegistry {
    renders: BTreeMap<String, Arc<dyn SceneRender>>,
}

impl SceneRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure under `id`. Ids must be unique and non-empty.
    pub fn register<F>(&mut self, id: impl Into<String>, render: F) -> ReelResult<()>
    where
        F: Fn(i64, &SceneCtx<'_>) -> VisualState + Send + Sync + 'static,
    {
        self.register_shared(id, Arc::new(render))
    }

    /// Register an already shared render function.
    pub fn register_shared(
        &mut self,
        id: impl Into<String>,
        render: Arc<dyn SceneRender>,
    ) -> ReelResult<()> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ReelError::validation("scene id must be non-empty"));
        }
        if self.renders.contains_key(&id) {
            return Err(ReelError::validation(format!(
                "scene '{id}' is already registered"
            )));
        }
        self.renders.insert(id, render);
        Ok(())
    }

    /// Render function for `id`.
    pub fn get(&self, id: &str) -> Option<Arc<dyn SceneRender>> {
        self.renders.get(id).cloned()
    }

    /// `true` if `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.renders.contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.renders.keys().map(String::as_str)
    }
}

impl std::fmt::Debug for SceneRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.renders.keys()).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
