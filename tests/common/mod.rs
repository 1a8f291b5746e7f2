#![allow(dead_code)]

use reel::scene::primitives::{
    counter, crt_flicker, fade_line_node, format_grouped, line_origin, pop_in, pop_in_node,
    pop_in_spring, progress_bar_node, spinner, typewriter_node,
};
use reel::{Node, Point, ReelResult, SceneCtx, SceneRegistry, SequenceDecl, VisualState};

pub const LAUNCH_SEQUENCE: &str = include_str!("../data/launch_sequence.json");

pub fn launch_registry() -> ReelResult<SceneRegistry> {
    let mut r = SceneRegistry::new();

    r.register("boot", |f, ctx: &SceneCtx<'_>| {
        let t = ctx.theme;
        let nodes = vec![
            typewriter_node("> initializing agent runtime", line_origin(t, 0), 0, 2.0, f, t),
            typewriter_node("> loading wallet", line_origin(t, 1), 20, 2.0, f, t),
            fade_line_node("[ OK ] keys unsealed", line_origin(t, 2), t.phosphor_bright, 40, f, t),
        ];
        VisualState::single_layer("boot", vec![Node::group(nodes).with_opacity(crt_flicker(f))])
    })?;

    r.register("burn", |f, ctx: &SceneCtx<'_>| {
        let t = ctx.theme;
        let balance = counter(12_000.0, 11_741.2, 60, 70, f);
        let color = if f >= 110 { t.red } else { t.white };
        VisualState::single_layer(
            "burn",
            vec![
                Node::text(
                    format!("${}", format_grouped(balance, 2)),
                    line_origin(t, 0),
                    t.mono_size_px * 3.0,
                    color,
                ),
                progress_bar_node("gas", line_origin(t, 4), 10, 90, f, t),
            ],
        )
    })?;

    let pop = pop_in_spring(20)?;
    r.register("deposit", move |f, ctx: &SceneCtx<'_>| {
        let t = ctx.theme;
        let s = spinner(0, 45, f);
        let center = Point::new(
            f64::from(ctx.canvas.width) / 2.0,
            f64::from(ctx.canvas.height) / 2.0,
        );
        let card = Node::rect(
            reel::Rect::from_center_size(center, (400.0, 200.0)),
            t.dim,
        );
        VisualState::single_layer(
            "deposit",
            vec![
                Node::text(s.glyph.to_string(), line_origin(t, 0), t.mono_size_px, t.phosphor)
                    .with_opacity(s.opacity),
                pop_in_node(card, center, pop_in(&pop, f, ctx.fps)),
            ],
        )
    })?;

    r.register("cta", |f, ctx: &SceneCtx<'_>| {
        let t = ctx.theme;
        VisualState::single_layer(
            "cta",
            vec![typewriter_node("deposit now", line_origin(t, 8), 10, 1.0, f, t)],
        )
    })?;

    Ok(r)
}

pub fn launch_decl() -> SequenceDecl {
    SequenceDecl::from_json(LAUNCH_SEQUENCE).unwrap()
}

pub fn mix64(mut z: u64) -> u64 {
    // SplitMix64 mixing function.
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn digest_u64(bytes: &[u8]) -> u64 {
    let mut state = 0x9E37_79B9_7F4A_7C15u64;
    for chunk in bytes.chunks(8) {
        let mut v = 0u64;
        for (i, &b) in chunk.iter().enumerate() {
            v |= (b as u64) << (i * 8);
        }
        state = mix64(state ^ v);
    }
    state
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
