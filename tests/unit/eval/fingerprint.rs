use super::*;
use crate::{
    effects::transitions::Transition,
    foundation::core::Point,
    timeline::sequence::{SceneSlot, Timeline},
};

fn state(opacity: f64) -> VisualState {
    let mut s = VisualState::single_layer(
        "boot",
        vec![
            Node::text("> init", Point::new(70.0, 60.0), 17.0, Rgba8Premul::opaque(51, 255, 51)),
            Node::group(vec![Node::rect(
                Rect::new(0.0, 0.0, 10.0, 10.0),
                Rgba8Premul::opaque(0, 0, 0),
            )]),
        ],
    );
    s.layers[0].opacity = opacity;
    s
}

#[test]
fn fingerprint_is_deterministic_for_same_state() {
    let s = state(1.0);
    assert_eq!(fingerprint_state(&s), fingerprint_state(&s.clone()));
}

#[test]
fn fingerprint_changes_when_state_changes() {
    assert_ne!(fingerprint_state(&state(1.0)), fingerprint_state(&state(0.5)));

    let mut clipped = state(1.0);
    clipped.layers[0].clip = Some(Rect::new(0.0, 0.0, 5.0, 5.0));
    assert_ne!(fingerprint_state(&state(1.0)), fingerprint_state(&clipped));

    let mut renamed = state(1.0);
    renamed.layers[0].scene_id = "burn".to_string();
    assert_ne!(fingerprint_state(&state(1.0)), fingerprint_state(&renamed));
}

#[test]
fn nesting_is_part_of_the_digest() {
    let flat = VisualState::single_layer(
        "x",
        vec![Node::group(vec![]), Node::group(vec![])],
    );
    let nested = VisualState::single_layer(
        "x",
        vec![Node::group(vec![Node::group(vec![])])],
    );
    assert_ne!(fingerprint_state(&flat), fingerprint_state(&nested));
}

#[test]
fn resolved_digest_tracks_timeline_position() {
    let tl = Timeline::new(
        vec![SceneSlot::new("a", 10), SceneSlot::new("b", 10)],
        vec![Transition::fade(4)],
    )
    .unwrap();
    // Clamped frames collapse onto the same position.
    assert_eq!(
        fingerprint_resolved(&tl.resolve(-3)),
        fingerprint_resolved(&tl.resolve(0))
    );
    assert_eq!(
        fingerprint_resolved(&tl.resolve(16)),
        fingerprint_resolved(&tl.resolve(99))
    );
    assert_ne!(
        fingerprint_resolved(&tl.resolve(6)),
        fingerprint_resolved(&tl.resolve(7))
    );
    assert_ne!(
        fingerprint_resolved(&tl.resolve(5)),
        fingerprint_resolved(&tl.resolve(6))
    );
}
