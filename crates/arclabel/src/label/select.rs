//! Scoring and selection of placements across circle candidates.

use crate::geom::{inside_boundary, normalize_angle, Circle, Segment};

use super::sweep::Candidate;
use super::wedge::{half_angle, height_ceiling};

/// Chosen label placement: baseline circle, half-height, and angular extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub circle: Circle,
    pub height: f64,
    pub angle_low: f64,
    pub angle_high: f64,
}

impl Placement {
    /// Polar angle of the label center, in (−π, π].
    #[inline]
    pub fn angle(&self) -> f64 {
        0.5 * (self.angle_low + self.angle_high)
    }
    /// Inner-arc area proxy: `(r − h) · (angle_high − angle_low)`.
    #[inline]
    pub fn score(&self) -> f64 {
        (self.circle.radius() - self.height) * (self.angle_high - self.angle_low)
    }
}

/// `(r − h) · 2δ(h)`.
#[inline]
pub fn placement_score(radius: f64, height: f64, aspect: f64) -> f64 {
    (radius - height) * 2.0 * half_angle(height, radius, aspect)
}

/// Highest usable sweep candidate on one circle (first on ties).
///
/// With `boundary`, candidates whose polar point falls outside the region are
/// dropped. Heights are clamped to the wedge ceiling; non-positive heights are
/// dropped.
pub fn best_for_circle(
    circle: &Circle,
    candidates: &[Candidate],
    boundary: Option<&[Segment]>,
    aspect: f64,
) -> Option<Candidate> {
    let ceiling = height_ceiling(circle.radius(), aspect);
    candidates
        .iter()
        .filter(|c| boundary.is_none_or(|segs| inside_boundary(circle.polar_point(c.angle), segs)))
        .map(|c| Candidate {
            angle: c.angle,
            height: c.height.min(ceiling),
        })
        .filter(|c| c.height.is_finite() && c.height > 0.0)
        .fold(None, |best: Option<Candidate>, c| match best {
            Some(b) if b.height >= c.height => Some(b),
            _ => Some(c),
        })
}

/// Best-scoring placement over per-circle candidates, first on ties.
/// `None` when nothing scores.
pub fn select_best(candidates: &[(Circle, Candidate)], aspect: f64) -> Option<Placement> {
    let mut best: Option<(f64, &Circle, &Candidate)> = None;
    for (circle, cand) in candidates {
        let score = placement_score(circle.radius(), cand.height, aspect);
        if !score.is_finite() {
            continue;
        }
        if best.is_none_or(|(s, _, _)| score > s) {
            best = Some((score, circle, cand));
        }
    }
    best.map(|(_, circle, cand)| {
        let angle = normalize_angle(cand.angle);
        let delta = half_angle(cand.height, circle.radius(), aspect);
        Placement {
            circle: *circle,
            height: cand.height,
            angle_low: angle - delta,
            angle_high: angle + delta,
        }
    })
}
