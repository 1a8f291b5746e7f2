use super::*;

fn clamp() -> InterpolateOptions {
    InterpolateOptions::clamped()
}

#[test]
fn two_point_range_interpolates_and_clamps() {
    assert_eq!(interpolate(5.0, &[0.0, 10.0], &[0.0, 100.0], clamp()).unwrap(), 50.0);
    assert_eq!(interpolate(-5.0, &[0.0, 10.0], &[0.0, 100.0], clamp()).unwrap(), 0.0);
    assert_eq!(interpolate(15.0, &[0.0, 10.0], &[0.0, 100.0], clamp()).unwrap(), 100.0);
}

#[test]
fn boundaries_hit_exact_outputs() {
    let c = Curve::new(vec![3.0, 7.0], vec![0.1, 0.7], clamp()).unwrap();
    assert_eq!(c.sample(3.0), 0.1);
    assert_eq!(c.sample(7.0), 0.7);
}

#[test]
fn multi_segment_curve_picks_enclosing_segment() {
    // Fade in, hold, fade out.
    let c = Curve::new(vec![10.0, 18.0, 52.0, 60.0], vec![0.0, 0.5, 0.5, 0.0], clamp()).unwrap();
    assert_eq!(c.sample(14.0), 0.25);
    assert_eq!(c.sample(18.0), 0.5);
    assert_eq!(c.sample(30.0), 0.5);
    assert_eq!(c.sample(56.0), 0.25);
    assert_eq!(c.sample(61.0), 0.0);
}

#[test]
fn outputs_need_not_be_monotone() {
    let c = Curve::new(vec![0.0, 14.0, 40.0, 50.0], vec![300.0, 120.0, -70.0, -70.0], clamp())
        .unwrap();
    assert_eq!(c.sample(0.0), 300.0);
    assert_eq!(c.sample(14.0), 120.0);
    assert_eq!(c.sample(45.0), -70.0);
}

#[test]
fn easing_shapes_segment_progress() {
    let opts = clamp().with_easing(Ease::OutQuad);
    let v = interpolate(5.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap();
    assert!((v - 75.0).abs() < 1e-9);
}

#[test]
fn extend_continues_boundary_slope() {
    let opts = clamp().extrapolate(Extrapolate::Extend);
    assert_eq!(interpolate(15.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap(), 150.0);
    assert_eq!(interpolate(-5.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap(), -50.0);

    // Slope comes from the boundary segment, not the whole range.
    let c = Curve::new(vec![0.0, 10.0, 20.0], vec![0.0, 100.0, 110.0], opts).unwrap();
    assert_eq!(c.sample(30.0), 120.0);
    assert_eq!(c.sample(-10.0), -100.0);
}

#[test]
fn sides_are_configured_independently() {
    let opts = InterpolateOptions {
        easing: None,
        extrapolate_left: Extrapolate::Clamp,
        extrapolate_right: Extrapolate::Extend,
    };
    assert_eq!(interpolate(-5.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap(), 0.0);
    assert_eq!(interpolate(20.0, &[0.0, 10.0], &[0.0, 100.0], opts).unwrap(), 200.0);
}

#[test]
fn identity_returns_the_input_frame() {
    let opts = clamp().extrapolate(Extrapolate::Identity);
    assert_eq!(interpolate(42.0, &[0.0, 10.0], &[0.0, 1.0], opts).unwrap(), 42.0);

    // Non-numeric curves fall back to clamping.
    let c = Curve::new(
        vec![0.0, 10.0],
        vec![Vec2::new(0.0, 0.0), Vec2::new(10.0, 20.0)],
        opts,
    )
    .unwrap();
    assert_eq!(c.sample(99.0), Vec2::new(10.0, 20.0));
}

#[test]
fn sampling_is_total_for_non_finite_frames() {
    let opts = clamp().extrapolate(Extrapolate::Extend);
    let c = Curve::new(vec![0.0, 10.0], vec![1.0, 2.0], opts).unwrap();
    assert_eq!(c.sample(f64::NAN), 1.0);
    assert_eq!(c.sample(f64::INFINITY), 2.0);
    assert_eq!(c.sample(f64::NEG_INFINITY), 1.0);
}

#[test]
fn colour_curves_interpolate_channels() {
    let c = Curve::new(
        vec![0.0, 10.0],
        vec![Rgba8Premul::opaque(0, 0, 0), Rgba8Premul::opaque(200, 100, 50)],
        clamp(),
    )
    .unwrap();
    assert_eq!(c.sample(5.0), Rgba8Premul::opaque(100, 50, 25));
}

#[test]
fn malformed_keyframe_sets_are_rejected() {
    assert!(Curve::<f64>::new(vec![0.0, 10.0], vec![0.0], clamp()).is_err());
    assert!(Curve::<f64>::new(vec![0.0], vec![0.0], clamp()).is_err());
    assert!(Curve::<f64>::new(vec![0.0, 0.0], vec![0.0, 1.0], clamp()).is_err());
    assert!(Curve::<f64>::new(vec![5.0, 1.0], vec![0.0, 1.0], clamp()).is_err());
    assert!(Curve::<f64>::new(vec![0.0, f64::NAN], vec![0.0, 1.0], clamp()).is_err());
    assert!(Curve::<f64>::new(vec![0.0, 1.0], vec![0.0, f64::INFINITY], clamp()).is_err());

    let err = Curve::<f64>::new(vec![0.0, 4.0, 4.0], vec![0.0, 1.0, 2.0], clamp()).unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
    assert!(err.to_string().contains("input[1]"));
}

#[test]
fn fractional_input_ranges_are_supported() {
    // Typewriter-style reveal: 11 chars at 2 chars/frame.
    let c = Curve::<f64>::new(vec![4.0, 4.0 + 11.0 / 2.0], vec![0.0, 11.0], clamp()).unwrap();
    assert_eq!(c.sample(4.0), 0.0);
    assert!((c.sample(6.0) - 4.0).abs() < 1e-9);
    assert_eq!(c.sample(100.0), 11.0);
}
