//! End-to-end placement: paths → circles → wedges → sweep → selection.
//!
//! Circle candidates are evaluated independently and sequentially; a path whose
//! fit fails is skipped, not fatal.

use crate::error::Result;
use crate::geom::{Circle, GeomCfg, LmCfg, Path, Segment};
use crate::skeleton::{extract_candidates_with, PathCfg, SkeletonGraph};

use super::circle_fit::fit_circle_with;
use super::select::{best_for_circle, select_best, Placement};
use super::sweep::{solve_placement, Candidate};
use super::wedge::{compute_wedges_with, height_at_half_angle, replicate_wrapped};

/// Height-to-width ratio of a single glyph box.
pub const GLYPH_ASPECT: f64 = 1.63;

/// Placement configuration.
#[derive(Clone, Copy, Debug)]
pub struct LabelCfg {
    /// Label height-to-width ratio. Overrides `paths.aspect`.
    pub aspect: f64,
    pub paths: PathCfg,
    /// Keep only sweep candidates whose polar point lies inside the boundary.
    pub require_inside: bool,
    pub geom: GeomCfg,
    pub lm: LmCfg,
}

impl Default for LabelCfg {
    fn default() -> Self {
        let paths = PathCfg::default();
        Self {
            aspect: paths.aspect,
            paths,
            require_inside: true,
            geom: GeomCfg::default(),
            lm: LmCfg::default(),
        }
    }
}

impl LabelCfg {
    /// Aspect for a single line of `text`: `GLYPH_ASPECT / chars`.
    pub fn for_text(text: &str) -> Self {
        let chars = text.chars().count().max(1);
        Self {
            aspect: GLYPH_ASPECT / chars as f64,
            ..Self::default()
        }
    }

    /// Path extraction settings with this label's aspect.
    pub fn path_cfg(&self) -> PathCfg {
        PathCfg {
            aspect: self.aspect,
            ..self.paths
        }
    }
}

/// Best candidate on one circle, or `None` if no angle has usable room.
/// Sweep heights are half-angles; the returned height is a half-height.
pub fn evaluate_circle(
    circle: &Circle,
    segments: &[Segment],
    cfg: &LabelCfg,
) -> Result<Option<Candidate>> {
    let wedges = compute_wedges_with(circle, segments, cfg.aspect, cfg.geom)?;
    let r = circle.radius();
    let candidates: Vec<Candidate> = solve_placement(&replicate_wrapped(&wedges))?
        .into_iter()
        .map(|c| Candidate {
            angle: c.angle,
            height: height_at_half_angle(c.height, r, cfg.aspect),
        })
        .collect();
    let boundary = cfg.require_inside.then_some(segments);
    Ok(best_for_circle(circle, &candidates, boundary, cfg.aspect))
}

/// Best placement over already extracted (resampled) paths.
pub fn best_placement(paths: &[Path], segments: &[Segment], cfg: &LabelCfg) -> Option<Placement> {
    let mut per_circle = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        let circle = match fit_circle_with(&path.points, cfg.geom, cfg.lm) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(path = i, error = %e, "skipping path");
                continue;
            }
        };
        match evaluate_circle(&circle, segments, cfg) {
            Ok(Some(cand)) => {
                tracing::debug!(
                    path = i,
                    radius = circle.radius(),
                    angle = cand.angle,
                    height = cand.height,
                    "circle candidate"
                );
                per_circle.push((circle, cand));
            }
            Ok(None) => tracing::debug!(path = i, "no usable height on circle"),
            Err(e) => tracing::debug!(path = i, error = %e, "skipping circle"),
        }
    }
    select_best(&per_circle, cfg.aspect)
}

/// Extract candidate paths from `graph`, then run [`best_placement`].
pub fn place_label(graph: &SkeletonGraph, segments: &[Segment], cfg: &LabelCfg) -> Option<Placement> {
    let paths = extract_candidates_with(graph, &cfg.path_cfg());
    tracing::debug!(paths = paths.len(), aspect = cfg.aspect, "placing label");
    best_placement(&paths, segments, cfg)
}
