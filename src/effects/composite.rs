use crate::{
    effects::transitions::{Presentation, SlideDirection},
    foundation::core::{Canvas, Rect, Vec2},
    scene::model::{Layer, VisualState},
};

/// Blend two independently rendered scene states.
///
/// `progress <= 0` (or NaN) returns `outgoing` unchanged and `progress >= 1` returns `incoming`
/// unchanged. In between, the result holds the outgoing layers followed by the incoming ones.
pub fn composite(
    outgoing: &VisualState,
    incoming: &VisualState,
    progress: f64,
    presentation: Presentation,
    canvas: Canvas,
) -> VisualState {
    if progress.is_nan() || progress <= 0.0 {
        return outgoing.clone();
    }
    if progress >= 1.0 {
        return incoming.clone();
    }
    let p = progress;

    let (out_layers, in_layers): (Vec<Layer>, Vec<Layer>) = match presentation {
        Presentation::Fade => (
            fade_layers(&outgoing.layers, 1.0 - p),
            fade_layers(&incoming.layers, p),
        ),
        Presentation::Slide(dir) => {
            let (out_offset, in_offset) = slide_offsets(dir, p, canvas);
            (
                shift_layers(&outgoing.layers, out_offset),
                shift_layers(&incoming.layers, in_offset),
            )
        }
        Presentation::Wipe(dir) => {
            let reveal = wipe_rect(dir, p, canvas);
            (
                outgoing.layers.clone(),
                incoming
                    .layers
                    .iter()
                    .cloned()
                    .map(|l| l.clipped(reveal))
                    .collect(),
            )
        }
    };

    let mut layers = out_layers;
    layers.extend(in_layers);
    VisualState { layers }
}

fn fade_layers(layers: &[Layer], factor: f64) -> Vec<Layer> {
    layers
        .iter()
        .cloned()
        .map(|mut l| {
            l.opacity *= factor;
            l
        })
        .collect()
}

fn shift_layers(layers: &[Layer], offset: Vec2) -> Vec<Layer> {
    layers.iter().cloned().map(|l| l.translated(offset)).collect()
}

// (outgoing, incoming) offsets. Incoming starts one full extent off-frame.
fn slide_offsets(dir: SlideDirection, p: f64, canvas: Canvas) -> (Vec2, Vec2) {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    match dir {
        SlideDirection::FromLeft => (Vec2::new(w * p, 0.0), Vec2::new(-w * (1.0 - p), 0.0)),
        SlideDirection::FromRight => (Vec2::new(-w * p, 0.0), Vec2::new(w * (1.0 - p), 0.0)),
        SlideDirection::FromTop => (Vec2::new(0.0, h * p), Vec2::new(0.0, -h * (1.0 - p))),
        SlideDirection::FromBottom => (Vec2::new(0.0, -h * p), Vec2::new(0.0, h * (1.0 - p))),
    }
}

fn wipe_rect(dir: SlideDirection, p: f64, canvas: Canvas) -> Rect {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);
    match dir {
        SlideDirection::FromLeft => Rect::new(0.0, 0.0, w * p, h),
        SlideDirection::FromRight => Rect::new(w * (1.0 - p), 0.0, w, h),
        SlideDirection::FromTop => Rect::new(0.0, 0.0, w, h * p),
        SlideDirection::FromBottom => Rect::new(0.0, h * (1.0 - p), w, h),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
