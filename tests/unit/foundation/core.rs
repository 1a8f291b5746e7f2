use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(2, 5).unwrap();
    assert!(!r.contains(1));
    assert!(r.contains(2));
    assert!(r.contains(4));
    assert!(!r.contains(5));
    assert_eq!(r.len_frames(), 3);
}

#[test]
fn frame_range_allows_negative_frames() {
    let r = FrameRange::new(-3, 2).unwrap();
    assert_eq!(r.len_frames(), 5);
    assert_eq!(r.frames().collect::<Vec<_>>(), vec![-3, -2, -1, 0, 1]);
    assert!(FrameRange::new(4, 1).is_err());
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn fps_frames_secs_roundtrip_floor() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123.0);
    assert_eq!(fps.secs_to_frames_floor(secs), 123);
}

#[test]
fn hex_colours_parse_and_premultiply() {
    assert_eq!(
        Rgba8Premul::from_hex("#33ff33").unwrap(),
        Rgba8Premul::opaque(0x33, 0xff, 0x33)
    );
    let half = Rgba8Premul::from_hex("ff000080").unwrap();
    assert_eq!(half.a, 0x80);
    assert_eq!(half.r, 128);
    assert!(Rgba8Premul::from_hex("#12345").is_err());
    assert!(Rgba8Premul::from_hex("#gg0000").is_err());
}

#[test]
fn hex_colours_reject_sign_prefixes() {
    assert!(Rgba8Premul::from_hex("#+f+f+f").is_err());
    assert!(Rgba8Premul::from_hex("+f+f+f+f").is_err());
}

#[test]
fn canvas_rect_spans_full_surface() {
    let c = Canvas {
        width: 1080,
        height: 720,
    };
    assert_eq!(c.rect(), Rect::new(0.0, 0.0, 1080.0, 720.0));
}
