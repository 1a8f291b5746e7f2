use super::*;

fn decl(presentation: &str, direction: Option<&str>) -> TransitionDecl {
    TransitionDecl {
        presentation: presentation.to_string(),
        direction: direction.map(str::to_string),
        overlap_frames: 8,
        ease: None,
    }
}

#[test]
fn parse_fade_and_defaults() {
    let t = parse_transition(&decl("fade", None)).unwrap();
    assert_eq!(t, Transition::fade(8));
    assert_eq!(t.ease, Ease::Linear);
    assert_eq!(
        parse_presentation(" Slide ", None).unwrap(),
        Presentation::Slide(SlideDirection::FromLeft)
    );
}

#[test]
fn parse_directions_and_aliases() {
    let cases = [
        ("from-left", SlideDirection::FromLeft),
        ("FROM-RIGHT", SlideDirection::FromRight),
        ("from_top", SlideDirection::FromTop),
        ("bottom", SlideDirection::FromBottom),
    ];
    for (s, want) in cases {
        assert_eq!(
            parse_presentation("wipe", Some(s)).unwrap(),
            Presentation::Wipe(want)
        );
        assert_eq!(parse_direction(Some(want.as_str())).unwrap(), want);
    }
}

#[test]
fn parse_rejects_unknown_inputs() {
    assert!(parse_presentation("", None).is_err());
    assert!(parse_presentation("zoom", None).is_err());
    assert!(parse_presentation("slide", Some("diagonal")).is_err());
    let err = parse_presentation("fade", Some("from-left")).unwrap_err();
    assert!(err.to_string().contains("direction"));
}

#[test]
fn parse_validates_ease() {
    let mut d = decl("fade", None);
    d.ease = Some(Ease::CubicBezier {
        x1: 2.0,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    });
    assert!(parse_transition(&d).is_err());

    d.ease = Some(Ease::InOutCubic);
    assert_eq!(parse_transition(&d).unwrap().ease, Ease::InOutCubic);
}

#[test]
fn constructors_and_names() {
    assert_eq!(Transition::cut().overlap_frames, 0);
    assert_eq!(Transition::slide(SlideDirection::FromTop, 4).presentation.name(), "slide");
    assert_eq!(Transition::wipe(SlideDirection::FromTop, 4).presentation.name(), "wipe");
    assert_eq!(
        Transition::fade(3).with_ease(Ease::OutQuad).ease,
        Ease::OutQuad
    );
}

#[test]
fn direction_serde_is_kebab_case() {
    assert_eq!(
        serde_json::to_string(&SlideDirection::FromBottom).unwrap(),
        "\"from-bottom\""
    );
}
