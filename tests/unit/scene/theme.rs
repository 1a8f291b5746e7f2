use super::*;

#[test]
fn default_palette_matches_hex() {
    let t = Theme::default();
    assert_eq!(t.background, Rgba8Premul::from_hex("#020a02").unwrap());
    assert_eq!(t.phosphor, Rgba8Premul::from_hex("#33ff33").unwrap());
    assert_eq!(t.amber, Rgba8Premul::from_hex("#ffb830").unwrap());
    assert_eq!(t.line_advance(), 25.5);
}

#[test]
fn partial_json_keeps_defaults() {
    let t: Theme = serde_json::from_str(r#"{ "mono_size_px": 20.0 }"#).unwrap();
    assert_eq!(t.mono_size_px, 20.0);
    assert_eq!(t.phosphor, Theme::default().phosphor);
    assert_eq!(t.line_advance(), 30.0);
}
