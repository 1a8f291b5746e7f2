use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    eval::clock::Composition,
    eval::fingerprint::{FrameFingerprint, fingerprint_resolved},
    foundation::core::FrameRange,
    foundation::error::{ReelError, ReelResult},
    scene::model::VisualState,
    timeline::sequence::Resolved,
};

/// Visual state of a single global frame.
///
/// Equivalent to [`Composition::render`]; kept next to the range APIs for symmetry.
pub fn render_frame(comp: &Composition, frame: i64) -> VisualState {
    comp.render(frame)
}

/// Render a range of frames (inclusive start, exclusive end) sequentially.
///
/// Frames outside `0..total_frames` are allowed and clamp like [`Composition::render`].
pub fn render_frames(comp: &Composition, range: FrameRange) -> ReelResult<Vec<VisualState>> {
    render_frames_with_stats(comp, range, &RenderThreading::default()).map(|(frames, _)| frames)
}

/// How [`render_frames_with_stats`] spreads work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderThreading {
    /// Render chunks on a dedicated rayon pool.
    pub parallel: bool,
    /// Frames per chunk; 0 is treated as 1.
    pub chunk_size: usize,
    /// Worker count, rayon's default when `None`. `Some(0)` is rejected.
    pub threads: Option<usize>,
    /// Render each distinct timeline position of a chunk once and clone it for repeats.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

/// Counters reported by [`render_frames_with_stats`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames returned.
    pub frames_total: u64,
    /// Frames whose scenes were actually rendered.
    pub frames_rendered: u64,
    /// Frames copied from an identical earlier frame of the same chunk.
    pub frames_elided: u64,
}

impl RenderStats {
    fn add(&mut self, other: RenderStats) {
        self.frames_total += other.frames_total;
        self.frames_rendered += other.frames_rendered;
        self.frames_elided += other.frames_elided;
    }
}

/// Render `range` in chunks, optionally in parallel, and report counters.
///
/// Output order always matches frame order, and the frames are identical to what sequential
/// rendering produces.
#[tracing::instrument(skip(comp, threading), fields(start = range.start, end = range.end))]
pub fn render_frames_with_stats(
    comp: &Composition,
    range: FrameRange,
    threading: &RenderThreading,
) -> ReelResult<(Vec<VisualState>, RenderStats)> {
    if range.start >= range.end {
        return Err(ReelError::validation("render range must be non-empty"));
    }

    let len = range.len_frames();
    let mut out = Vec::with_capacity(len.min(4096) as usize);
    let mut stats = RenderStats::default();
    let chunk_size = normalized_chunk_size(threading.chunk_size);

    let pool = if threading.parallel {
        Some(build_thread_pool(threading.threads)?)
    } else {
        None
    };

    let mut chunk_start = range.start;
    while chunk_start < range.end {
        let chunk_end = chunk_start.saturating_add(chunk_size).min(range.end);
        let chunk = FrameRange::new(chunk_start, chunk_end)
            .map_err(|e| ReelError::evaluation(format!("invalid chunk range: {e}")))?;
        let (mut frames, chunk_stats) =
            render_chunk(comp, chunk, threading.static_frame_elision, pool.as_ref())?;
        tracing::trace!(
            start = chunk.start,
            end = chunk.end,
            rendered = chunk_stats.frames_rendered,
            elided = chunk_stats.frames_elided,
            "chunk rendered"
        );
        out.append(&mut frames);
        stats.add(chunk_stats);
        chunk_start = chunk_end;
    }

    Ok((out, stats))
}

fn render_chunk(
    comp: &Composition,
    range: FrameRange,
    elide: bool,
    pool: Option<&rayon::ThreadPool>,
) -> ReelResult<(Vec<VisualState>, RenderStats)> {
    let resolved: Vec<Resolved> = range.frames().map(|f| comp.resolve(f)).collect();

    let mut unique_indices = Vec::<usize>::with_capacity(resolved.len());
    let mut frame_to_unique = Vec::<usize>::with_capacity(resolved.len());
    if elide {
        let mut first = HashMap::<FrameFingerprint, usize>::new();
        for (idx, r) in resolved.iter().enumerate() {
            let fp = fingerprint_resolved(r);
            if let Some(existing) = first.get(&fp).copied() {
                frame_to_unique.push(existing);
            } else {
                let slot = unique_indices.len();
                unique_indices.push(idx);
                first.insert(fp, slot);
                frame_to_unique.push(slot);
            }
        }
    } else {
        for idx in 0..resolved.len() {
            frame_to_unique.push(idx);
            unique_indices.push(idx);
        }
    }

    let render_one = |idx: &usize| comp.render_resolved(&resolved[*idx]);
    let rendered: Vec<VisualState> = match pool {
        Some(pool) => pool.install(|| unique_indices.par_iter().map(render_one).collect()),
        None => unique_indices.iter().map(render_one).collect(),
    };

    let mut unique_frames: Vec<Option<VisualState>> = rendered.into_iter().map(Some).collect();
    let mut remaining = vec![0usize; unique_frames.len()];
    for &u in &frame_to_unique {
        remaining[u] += 1;
    }

    let mut out = Vec::<VisualState>::with_capacity(frame_to_unique.len());
    for u in frame_to_unique {
        let frame = if remaining[u] == 1 {
            unique_frames[u].take()
        } else {
            unique_frames[u].clone()
        };
        out.push(frame.ok_or_else(|| {
            ReelError::evaluation("internal error: unique frame missing during expansion")
        })?);
        remaining[u] -= 1;
    }

    let total = resolved.len() as u64;
    let rendered_count = unique_indices.len() as u64;
    Ok((
        out,
        RenderStats {
            frames_total: total,
            frames_rendered: rendered_count,
            frames_elided: total.saturating_sub(rendered_count),
        },
    ))
}

pub(crate) fn build_thread_pool(threads: Option<usize>) -> ReelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ReelError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ReelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> i64 {
    i64::try_from(chunk_size.max(1)).unwrap_or(i64::MAX)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
