//! Synthetic curved corridors (annular bands) with replay tokens.
//!
//! Purpose
//! - Provide a deterministic, parameterizable source of shapes with a known
//!   answer for tests, benches and the CLI demo: the label baseline of a band
//!   around a circle is that circle.
//!
//! Model
//! - A corridor is the band between radii `R − w` and `R + w` about a center,
//!   over the polar range `[start, start + span]`. Its boundary is a closed
//!   ring (outer arc, inner arc, two radial caps); its skeleton is the
//!   mid-radius arc with every edge at clearance `w`.
//! - Random draws jitter radius, half-width, span and phase. Determinism uses
//!   a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `skeleton::SkeletonGraph`, `geom::polylines_to_segments`

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{polylines_to_segments, Point, Segment};
use crate::skeleton::{GraphEdge, SkeletonGraph};

/// Random corridor configuration.
#[derive(Clone, Copy, Debug)]
pub struct CorridorCfg {
    /// Edges per arc, for both the boundary and the skeleton.
    pub arc_edges: usize,
    pub base_radius: f64,
    /// Radius = `base_radius * (1 + u)`, with `u ∈ [-radius_jitter, radius_jitter]`.
    pub radius_jitter: f64,
    /// Half-width as a fraction of the radius, sampled in `[min, max]`. Clamped to (0, 0.9].
    pub width_frac: (f64, f64),
    /// Angular span in radians, sampled in `[min, max]`. Clamped below 2π.
    pub span: (f64, f64),
    /// Random start angle in [0, 2π)?
    pub random_phase: bool,
}

impl Default for CorridorCfg {
    fn default() -> Self {
        Self {
            arc_edges: 40,
            base_radius: 10.0,
            radius_jitter: 0.3,
            width_frac: (0.05, 0.2),
            span: (1.0, 3.0),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// A band around an arc, with its boundary and skeleton.
#[derive(Clone, Debug)]
pub struct Corridor {
    pub center: Point,
    pub radius: f64,
    pub half_width: f64,
    pub start: f64,
    pub span: f64,
    /// Closed ring: outer arc forward, inner arc backward, back to the start.
    pub ring: Vec<Point>,
    pub boundary: Vec<Segment>,
    pub skeleton: SkeletonGraph,
}

fn arc(center: Point, radius: f64, from: f64, to: f64, edges: usize) -> Vec<Point> {
    (0..=edges)
        .map(|i| {
            let th = from + (to - from) * (i as f64 / edges as f64);
            center + Vector2::new(th.cos(), th.sin()) * radius
        })
        .collect()
}

/// Build a corridor deterministically. `half_width` is clamped below `radius`,
/// `span` into (0, 2π), and `arc_edges` to at least 1.
pub fn corridor(
    center: Point,
    radius: f64,
    half_width: f64,
    start: f64,
    span: f64,
    arc_edges: usize,
) -> Corridor {
    let n = arc_edges.max(1);
    let radius = radius.abs().max(1e-9);
    let half_width = half_width.abs().clamp(1e-12, 0.9 * radius);
    let span = span.clamp(1e-6, TAU - 1e-6);

    let mut ring = arc(center, radius + half_width, start, start + span, n);
    ring.extend(arc(center, radius - half_width, start + span, start, n));
    ring.push(ring[0]);
    let boundary = polylines_to_segments(std::slice::from_ref(&ring));

    let mid = arc(center, radius, start, start + span, n);
    let edges: Vec<GraphEdge> = mid
        .windows(2)
        .map(|w| GraphEdge::new(w[0], w[1], (w[1] - w[0]).norm(), half_width))
        .collect();

    Corridor {
        center,
        radius,
        half_width,
        start,
        span,
        ring,
        boundary,
        skeleton: SkeletonGraph::from_edges(&edges),
    }
}

fn uniform<R: Rng>(rng: &mut R, (a, b): (f64, f64)) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.gen_range(lo..=hi)
}

/// Draw a random corridor centered at the origin.
pub fn draw_corridor(cfg: CorridorCfg, tok: ReplayToken) -> Corridor {
    let mut rng = tok.to_std_rng();
    let rj = cfg.radius_jitter.clamp(0.0, 0.9);
    let radius = cfg.base_radius.abs().max(1e-9) * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
    let wf = uniform(&mut rng, cfg.width_frac).clamp(1e-6, 0.9);
    let span = uniform(&mut rng, cfg.span);
    let start = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    corridor(Vector2::zeros(), radius, wf * radius, start, span, cfg.arc_edges)
}
