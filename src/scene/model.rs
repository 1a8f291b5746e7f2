use crate::foundation::core::{Affine, Point, Rect, Rgba8Premul, Vec2};

/// Renderer-agnostic description of one output frame.
///
/// Layers are in painter's order: later layers draw on top of earlier ones.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualState {
    /// Layers, bottom first.
    pub layers: Vec<Layer>,
}

impl VisualState {
    /// State made of one untransformed, fully opaque layer.
    pub fn single_layer(scene_id: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            layers: vec![Layer::new(scene_id, nodes)],
        }
    }

    /// `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|l| l.nodes.is_empty())
    }
}

/// One scene's contribution to a frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    /// Scene that produced the layer.
    pub scene_id: String,
    /// Multiplier in `[0, 1]` applied to the whole layer.
    pub opacity: f64,
    /// Layer-to-canvas transform.
    pub transform: Affine,
    /// Optional clip rectangle in canvas space, applied after `transform`.
    pub clip: Option<Rect>,
    /// Content in layer space.
    pub nodes: Vec<Node>,
}

impl Layer {
    /// Opaque layer with the identity transform and no clip.
    pub fn new(scene_id: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            scene_id: scene_id.into(),
            opacity: 1.0,
            transform: Affine::IDENTITY,
            clip: None,
            nodes,
        }
    }

    /// Move the layer (and its clip) by `offset` canvas pixels.
    pub fn translated(mut self, offset: Vec2) -> Self {
        self.transform = Affine::translate(offset) * self.transform;
        self.clip = self.clip.map(|c| c + offset);
        self
    }

    /// Intersect the current clip with `rect`.
    pub fn clipped(mut self, rect: Rect) -> Self {
        self.clip = Some(match self.clip {
            Some(existing) => existing.intersect(rect),
            None => rect,
        });
        self
    }
}

/// Drawable content inside a [`Layer`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    /// Single line of monospace text, baseline-left at `origin`.
    Text {
        /// Content.
        text: String,
        /// Anchor point in layer space.
        origin: Point,
        /// Font size in pixels.
        size_px: f64,
        /// Fill colour.
        color: Rgba8Premul,
        /// Glow radius in pixels, 0 for none.
        glow_px: f64,
    },
    /// Filled axis-aligned rectangle.
    Rect {
        /// Bounds in layer space.
        rect: Rect,
        /// Fill colour.
        fill: Rgba8Premul,
    },
    /// Transformed, faded container.
    Group {
        /// Group-to-parent transform.
        transform: Affine,
        /// Multiplier in `[0, 1]`.
        opacity: f64,
        /// Children in painter's order.
        children: Vec<Node>,
    },
}

impl Node {
    /// Text node without glow.
    pub fn text(
        text: impl Into<String>,
        origin: Point,
        size_px: f64,
        color: Rgba8Premul,
    ) -> Self {
        Self::Text {
            text: text.into(),
            origin,
            size_px,
            color,
            glow_px: 0.0,
        }
    }

    /// Filled rectangle.
    pub fn rect(rect: Rect, fill: Rgba8Premul) -> Self {
        Self::Rect { rect, fill }
    }

    /// Identity, opaque group.
    pub fn group(children: Vec<Node>) -> Self {
        Self::Group {
            transform: Affine::IDENTITY,
            opacity: 1.0,
            children,
        }
    }

    /// Wrap in a group faded by `opacity`, or scale an existing group's opacity.
    pub fn with_opacity(self, opacity: f64) -> Self {
        match self {
            Self::Group {
                transform,
                opacity: o,
                children,
            } => Self::Group {
                transform,
                opacity: o * opacity,
                children,
            },
            other => Self::Group {
                transform: Affine::IDENTITY,
                opacity,
                children: vec![other],
            },
        }
    }

    /// Wrap in a group transformed by `transform`, or prepend it to an existing group's.
    pub fn with_transform(self, transform: Affine) -> Self {
        match self {
            Self::Group {
                transform: t,
                opacity,
                children,
            } => Self::Group {
                transform: transform * t,
                opacity,
                children,
            },
            other => Self::Group {
                transform,
                opacity: 1.0,
                children: vec![other],
            },
        }
    }

    /// Set the glow radius of a text node; other nodes are returned unchanged.
    pub fn with_glow(mut self, px: f64) -> Self {
        if let Self::Text { glow_px, .. } = &mut self {
            *glow_px = px;
        }
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
