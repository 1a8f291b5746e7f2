use crate::{
    animation::ease::Ease,
    composition::model::TransitionDecl,
    foundation::error::{ReelError, ReelResult},
};

/// Edge an incoming scene enters from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideDirection {
    /// Enters from the left edge.
    #[default]
    FromLeft,
    /// Enters from the right edge.
    FromRight,
    /// Enters from the top edge.
    FromTop,
    /// Enters from the bottom edge.
    FromBottom,
}

impl SlideDirection {
    /// Canonical declaration name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FromLeft => "from-left",
            Self::FromRight => "from-right",
            Self::FromTop => "from-top",
            Self::FromBottom => "from-bottom",
        }
    }
}

/// How two overlapping scenes are combined during a transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Presentation {
    /// Cross-fade.
    #[default]
    Fade,
    /// Incoming pushes outgoing off the opposite edge.
    Slide(SlideDirection),
    /// Incoming is revealed behind an edge moving across the canvas.
    Wipe(SlideDirection),
}

impl Presentation {
    /// Canonical declaration name (`"fade"`, `"slide"`, `"wipe"`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide(_) => "slide",
            Self::Wipe(_) => "wipe",
        }
    }
}

/// Overlap between two consecutive scenes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Blend applied to the overlap.
    pub presentation: Presentation,
    /// Frames during which both scenes are active. Zero is a hard cut.
    pub overlap_frames: u32,
    /// Shapes the linear blend progress before compositing.
    pub ease: Ease,
}

impl Transition {
    /// Cross-fade over `overlap_frames`.
    pub fn fade(overlap_frames: u32) -> Self {
        Self {
            presentation: Presentation::Fade,
            overlap_frames,
            ease: Ease::Linear,
        }
    }

    /// Slide over `overlap_frames`.
    pub fn slide(direction: SlideDirection, overlap_frames: u32) -> Self {
        Self {
            presentation: Presentation::Slide(direction),
            overlap_frames,
            ease: Ease::Linear,
        }
    }

    /// Wipe over `overlap_frames`.
    pub fn wipe(direction: SlideDirection, overlap_frames: u32) -> Self {
        Self {
            presentation: Presentation::Wipe(direction),
            overlap_frames,
            ease: Ease::Linear,
        }
    }

    /// Hard cut: no overlap.
    pub fn cut() -> Self {
        Self::fade(0)
    }

    /// Replace the progress easing.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }
}

/// Parse a direction name; `None` selects [`SlideDirection::FromLeft`].
pub fn parse_direction(direction: Option<&str>) -> ReelResult<SlideDirection> {
    let Some(s) = direction else {
        return Ok(SlideDirection::default());
    };
    match s.trim().to_ascii_lowercase().as_str() {
        "from-left" | "from_left" | "fromleft" | "left" => Ok(SlideDirection::FromLeft),
        "from-right" | "from_right" | "fromright" | "right" => Ok(SlideDirection::FromRight),
        "from-top" | "from_top" | "fromtop" | "top" => Ok(SlideDirection::FromTop),
        "from-bottom" | "from_bottom" | "frombottom" | "bottom" => Ok(SlideDirection::FromBottom),
        other => Err(ReelError::validation(format!(
            "unknown transition direction '{other}'"
        ))),
    }
}

/// Parse a presentation name plus optional direction.
pub fn parse_presentation(kind: &str, direction: Option<&str>) -> ReelResult<Presentation> {
    let kind = kind.trim().to_ascii_lowercase();
    if kind.is_empty() {
        return Err(ReelError::validation(
            "transition presentation must be non-empty",
        ));
    }

    match kind.as_str() {
        "fade" | "crossfade" => {
            if let Some(d) = direction {
                return Err(ReelError::validation(format!(
                    "fade does not take a direction (got '{d}')"
                )));
            }
            Ok(Presentation::Fade)
        }
        "slide" => Ok(Presentation::Slide(parse_direction(direction)?)),
        "wipe" => Ok(Presentation::Wipe(parse_direction(direction)?)),
        _ => Err(ReelError::validation(format!(
            "unknown transition presentation '{kind}'"
        ))),
    }
}

/// Turn a declaration into a [`Transition`].
pub fn parse_transition(decl: &TransitionDecl) -> ReelResult<Transition> {
    let presentation = parse_presentation(&decl.presentation, decl.direction.as_deref())?;
    let ease = decl.ease.unwrap_or_default();
    ease.validate()?;
    Ok(Transition {
        presentation,
        overlap_frames: decl.overlap_frames,
        ease,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/effects/transitions.rs"]
mod tests;
