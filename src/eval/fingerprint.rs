use crate::{
    foundation::core::{Affine, Rect, Rgba8Premul},
    foundation::math::Fnv1a64,
    scene::model::{Node, VisualState},
    timeline::sequence::Resolved,
};

/// 128-bit digest of a frame, stable across runs and platforms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// Digest of the first FNV stream.
    pub hi: u64,
    /// Digest of the second, differently seeded stream.
    pub lo: u64,
}

struct PairHasher {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl PairHasher {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new_default(),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn str(&mut self, s: &str) {
        self.a.write_str(s);
        self.b.write_str(s);
    }

    fn affine(&mut self, t: Affine) {
        for c in t.as_coeffs() {
            self.f64(c);
        }
    }

    fn rect(&mut self, r: Rect) {
        self.f64(r.x0);
        self.f64(r.y0);
        self.f64(r.x1);
        self.f64(r.y1);
    }

    fn color(&mut self, c: Rgba8Premul) {
        self.a.write_bytes(&[c.r, c.g, c.b, c.a]);
        self.b.write_bytes(&[c.r, c.g, c.b, c.a]);
    }

    fn node(&mut self, n: &Node) {
        match n {
            Node::Text {
                text,
                origin,
                size_px,
                color,
                glow_px,
            } => {
                self.u8(0);
                self.str(text);
                self.f64(origin.x);
                self.f64(origin.y);
                self.f64(*size_px);
                self.color(*color);
                self.f64(*glow_px);
            }
            Node::Rect { rect, fill } => {
                self.u8(1);
                self.rect(*rect);
                self.color(*fill);
            }
            Node::Group {
                transform,
                opacity,
                children,
            } => {
                self.u8(2);
                self.affine(*transform);
                self.f64(*opacity);
                self.u64(children.len() as u64);
                for c in children {
                    self.node(c);
                }
            }
        }
    }

    fn finish(self) -> FrameFingerprint {
        FrameFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

/// Digest of everything a rasterizer would read from `state`.
///
/// Equal states always hash equal. Floats are hashed by bit pattern.
pub fn fingerprint_state(state: &VisualState) -> FrameFingerprint {
    let mut h = PairHasher::new();
    h.u64(state.layers.len() as u64);
    for layer in &state.layers {
        h.str(&layer.scene_id);
        h.f64(layer.opacity);
        h.affine(layer.transform);
        match layer.clip {
            Some(r) => {
                h.u8(1);
                h.rect(r);
            }
            None => h.u8(0),
        }
        h.u64(layer.nodes.len() as u64);
        for n in &layer.nodes {
            h.node(n);
        }
    }
    h.finish()
}

/// Digest of a resolved timeline position.
///
/// Two frames with equal digests render identically, which lets the pipeline skip
/// re-rendering them.
pub fn fingerprint_resolved(resolved: &Resolved) -> FrameFingerprint {
    let mut h = PairHasher::new();
    h.u64(resolved.active.len() as u64);
    for a in &resolved.active {
        h.u64(a.scene_index as u64);
        h.u64(a.local_frame as u64);
    }
    match resolved.blend {
        Some(b) => {
            h.u8(1);
            h.u64(b.transition_index as u64);
            h.f64(b.progress);
        }
        None => h.u8(0),
    }
    h.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
