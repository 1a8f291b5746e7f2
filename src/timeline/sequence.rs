use smallvec::SmallVec;

use crate::{
    effects::transitions::Transition,
    foundation::core::FrameRange,
    foundation::error::{ReelError, ReelResult},
};

/// Identity and length of one scene in a sequence.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SceneSlot {
    /// Unique scene id.
    pub id: String,
    /// Length in frames, at least 1.
    pub duration_frames: u32,
}

impl SceneSlot {
    /// Build a slot.
    pub fn new(id: impl Into<String>, duration_frames: u32) -> Self {
        Self {
            id: id.into(),
            duration_frames,
        }
    }
}

/// A scene visible at a resolved frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct ActiveScene {
    /// Index into the sequence.
    pub scene_index: usize,
    /// Frame relative to the scene's own start.
    pub local_frame: i64,
}

/// Blend between the two active scenes of a [`Resolved`] frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Blend {
    /// Transition driving the blend.
    pub transition_index: usize,
    /// Linear progress in `[0, 1]`, before the transition's ease.
    pub progress: f64,
}

/// What a global frame maps to.
///
/// `active` holds one scene, or two (outgoing then incoming) when `blend` is set.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Resolved {
    /// Visible scenes, outgoing first.
    pub active: SmallVec<[ActiveScene; 2]>,
    /// Set while inside a transition window.
    pub blend: Option<Blend>,
}

impl Resolved {
    fn single(scene_index: usize, local_frame: i64) -> Self {
        let mut active = SmallVec::new();
        active.push(ActiveScene {
            scene_index,
            local_frame,
        });
        Self {
            active,
            blend: None,
        }
    }
}

/// Scenes laid end to end, consecutive scenes overlapping by their transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    scenes: Vec<SceneSlot>,
    transitions: Vec<Transition>,
    starts: Vec<i64>,
    total: i64,
}

impl Timeline {
    /// Validate the sequence and precompute scene start frames.
    ///
    /// `transitions[i]` sits between `scenes[i]` and `scenes[i + 1]`.
    pub fn new(scenes: Vec<SceneSlot>, transitions: Vec<Transition>) -> ReelResult<Self> {
        validate(&scenes, &transitions)?;

        let mut starts = Vec::with_capacity(scenes.len());
        let mut cursor = 0i64;
        for (i, scene) in scenes.iter().enumerate() {
            if i > 0 {
                cursor -= i64::from(transitions[i - 1].overlap_frames);
            }
            starts.push(cursor);
            cursor += i64::from(scene.duration_frames);
        }

        tracing::debug!(
            scenes = scenes.len(),
            total_frames = cursor,
            "timeline built"
        );

        Ok(Self {
            scenes,
            transitions,
            starts,
            total: cursor,
        })
    }

    /// Sum of durations minus sum of overlaps.
    pub fn total_frames(&self) -> i64 {
        self.total
    }

    /// Scenes in sequence order.
    pub fn scenes(&self) -> &[SceneSlot] {
        &self.scenes
    }

    /// Transitions in sequence order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Global frame at which scene `index` starts.
    pub fn scene_start(&self, index: usize) -> Option<i64> {
        self.starts.get(index).copied()
    }

    /// Global frames covered by scene `index`.
    pub fn scene_range(&self, index: usize) -> Option<FrameRange> {
        let start = self.scene_start(index)?;
        let dur = i64::from(self.scenes[index].duration_frames);
        Some(FrameRange {
            start,
            end: start + dur,
        })
    }

    /// Global frames during which transition `index` blends its two scenes.
    pub fn transition_window(&self, index: usize) -> Option<FrameRange> {
        let t = self.transitions.get(index)?;
        let start = self.starts[index + 1];
        Some(FrameRange {
            start,
            end: start + i64::from(t.overlap_frames),
        })
    }

    /// Map a global frame to its active scene(s). Total for every `i64`.
    pub fn resolve(&self, frame: i64) -> Resolved {
        if frame < 0 {
            return Resolved::single(0, 0);
        }
        if frame >= self.total {
            let last = self.scenes.len() - 1;
            return Resolved::single(last, i64::from(self.scenes[last].duration_frames) - 1);
        }

        // starts[0] == 0 <= frame, so the partition point is >= 1.
        let i = self.starts.partition_point(|&s| s <= frame) - 1;
        let start = self.starts[i];

        if i > 0 {
            let overlap = i64::from(self.transitions[i - 1].overlap_frames);
            if frame < start + overlap {
                let progress = ((frame - start) as f64 / overlap as f64).clamp(0.0, 1.0);
                let mut active = SmallVec::new();
                active.push(ActiveScene {
                    scene_index: i - 1,
                    local_frame: frame - self.starts[i - 1],
                });
                active.push(ActiveScene {
                    scene_index: i,
                    local_frame: frame - start,
                });
                return Resolved {
                    active,
                    blend: Some(Blend {
                        transition_index: i - 1,
                        progress,
                    }),
                };
            }
        }

        Resolved::single(i, frame - start)
    }
}

fn validate(scenes: &[SceneSlot], transitions: &[Transition]) -> ReelResult<()> {
    if scenes.is_empty() {
        return Err(ReelError::validation(
            "sequence must contain at least one scene",
        ));
    }

    for (i, scene) in scenes.iter().enumerate() {
        if scene.id.trim().is_empty() {
            return Err(ReelError::validation(format!(
                "scene {i}: id must be non-empty"
            )));
        }
        if scene.duration_frames == 0 {
            return Err(ReelError::validation(format!(
                "scene '{}' (index {i}): duration_frames must be >= 1",
                scene.id
            )));
        }
        if let Some(j) = scenes[..i].iter().position(|s| s.id == scene.id) {
            return Err(ReelError::validation(format!(
                "scene '{}' (index {i}): id duplicates scene {j}",
                scene.id
            )));
        }
    }

    if transitions.len() != scenes.len() - 1 {
        return Err(ReelError::validation(format!(
            "sequence of {} scenes needs {} transitions (got {})",
            scenes.len(),
            scenes.len() - 1,
            transitions.len()
        )));
    }

    for (i, t) in transitions.iter().enumerate() {
        let (prev, next) = (&scenes[i], &scenes[i + 1]);
        let limit = prev.duration_frames.min(next.duration_frames);
        if t.overlap_frames > limit {
            return Err(ReelError::validation(format!(
                "transition {i}: overlap_frames {} exceeds the shorter of scenes '{}' ({}) and '{}' ({})",
                t.overlap_frames,
                prev.id,
                prev.duration_frames,
                next.id,
                next.duration_frames
            )));
        }
        t.ease.validate()?;
    }

    // A middle scene must fully release its incoming overlap before its outgoing one starts.
    for i in 1..scenes.len().saturating_sub(1) {
        let overlap_in = u64::from(transitions[i - 1].overlap_frames);
        let overlap_out = u64::from(transitions[i].overlap_frames);
        if overlap_in + overlap_out > u64::from(scenes[i].duration_frames) {
            return Err(ReelError::validation(format!(
                "scene '{}' (index {i}): transitions {} and {i} overlap ({overlap_in} + {overlap_out} frames > duration {})",
                scenes[i].id,
                i - 1,
                scenes[i].duration_frames
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
