use super::*;
use crate::{
    foundation::core::{Affine, Point, Rgba8Premul},
    scene::model::Node,
};

fn canvas() -> Canvas {
    Canvas {
        width: 1080,
        height: 720,
    }
}

fn state(id: &str) -> VisualState {
    VisualState::single_layer(
        id,
        vec![Node::text(id, Point::new(70.0, 60.0), 17.0, Rgba8Premul::opaque(51, 255, 51))],
    )
}

const ALL: [Presentation; 9] = [
    Presentation::Fade,
    Presentation::Slide(SlideDirection::FromLeft),
    Presentation::Slide(SlideDirection::FromRight),
    Presentation::Slide(SlideDirection::FromTop),
    Presentation::Slide(SlideDirection::FromBottom),
    Presentation::Wipe(SlideDirection::FromLeft),
    Presentation::Wipe(SlideDirection::FromRight),
    Presentation::Wipe(SlideDirection::FromTop),
    Presentation::Wipe(SlideDirection::FromBottom),
];

#[test]
fn endpoints_are_identities() {
    let (a, b) = (state("a"), state("b"));
    for p in ALL {
        assert_eq!(composite(&a, &b, 0.0, p, canvas()), a);
        assert_eq!(composite(&a, &b, -3.0, p, canvas()), a);
        assert_eq!(composite(&a, &b, f64::NAN, p, canvas()), a);
        assert_eq!(composite(&a, &b, 1.0, p, canvas()), b);
        assert_eq!(composite(&a, &b, 7.0, p, canvas()), b);
    }
}

#[test]
fn painter_order_puts_incoming_on_top() {
    for p in ALL {
        let s = composite(&state("a"), &state("b"), 0.4, p, canvas());
        let ids: Vec<&str> = s.layers.iter().map(|l| l.scene_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }
}

#[test]
fn fade_weights_opacity() {
    let s = composite(&state("a"), &state("b"), 0.25, Presentation::Fade, canvas());
    assert_eq!(s.layers[0].opacity, 0.75);
    assert_eq!(s.layers[1].opacity, 0.25);
}

#[test]
fn fade_is_monotone() {
    let (a, b) = (state("a"), state("b"));
    let mut last_in = 0.0;
    let mut last_out = 1.0;
    for i in 1..20 {
        let s = composite(&a, &b, f64::from(i) / 20.0, Presentation::Fade, canvas());
        assert!(s.layers[1].opacity > last_in);
        assert!(s.layers[0].opacity < last_out);
        last_in = s.layers[1].opacity;
        last_out = s.layers[0].opacity;
    }
}

#[test]
fn fade_scales_existing_layer_opacity() {
    let mut a = state("a");
    a.layers[0].opacity = 0.5;
    let s = composite(&a, &state("b"), 0.5, Presentation::Fade, canvas());
    assert_eq!(s.layers[0].opacity, 0.25);
}

#[test]
fn slide_from_left_pushes_outgoing_right() {
    let s = composite(
        &state("a"),
        &state("b"),
        0.25,
        Presentation::Slide(SlideDirection::FromLeft),
        canvas(),
    );
    assert_eq!(s.layers[0].transform, Affine::translate((270.0, 0.0)));
    assert_eq!(s.layers[1].transform, Affine::translate((-810.0, 0.0)));
    assert_eq!(s.layers[0].opacity, 1.0);
    assert_eq!(s.layers[1].opacity, 1.0);
}

#[test]
fn slide_vertical_uses_height() {
    let s = composite(
        &state("a"),
        &state("b"),
        0.5,
        Presentation::Slide(SlideDirection::FromBottom),
        canvas(),
    );
    assert_eq!(s.layers[0].transform, Affine::translate((0.0, -360.0)));
    assert_eq!(s.layers[1].transform, Affine::translate((0.0, 360.0)));
}

#[test]
fn slide_keeps_inner_transform() {
    let mut b = state("b");
    b.layers[0].transform = Affine::scale(2.0);
    let s = composite(
        &state("a"),
        &b,
        0.5,
        Presentation::Slide(SlideDirection::FromRight),
        canvas(),
    );
    assert_eq!(
        s.layers[1].transform,
        Affine::translate((540.0, 0.0)) * Affine::scale(2.0)
    );
}

#[test]
fn incoming_slide_offset_shrinks_monotonically() {
    let mut last = f64::INFINITY;
    for i in 1..10 {
        let s = composite(
            &state("a"),
            &state("b"),
            f64::from(i) / 10.0,
            Presentation::Slide(SlideDirection::FromTop),
            canvas(),
        );
        let dy = s.layers[1].transform.translation().y.abs();
        assert!(dy < last);
        last = dy;
    }
}

#[test]
fn wipe_clips_incoming_only() {
    let s = composite(
        &state("a"),
        &state("b"),
        0.5,
        Presentation::Wipe(SlideDirection::FromRight),
        canvas(),
    );
    assert_eq!(s.layers[0].clip, None);
    assert_eq!(s.layers[1].clip, Some(Rect::new(540.0, 0.0, 1080.0, 720.0)));

    let mut b = state("b");
    b.layers[0].clip = Some(Rect::new(0.0, 0.0, 1080.0, 100.0));
    let s = composite(
        &state("a"),
        &b,
        0.5,
        Presentation::Wipe(SlideDirection::FromTop),
        canvas(),
    );
    assert_eq!(s.layers[1].clip, Some(Rect::new(0.0, 0.0, 1080.0, 100.0)));
}
