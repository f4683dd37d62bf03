//! Wedges: per-segment height limits as functions of polar angle.
//!
//! Model
//! - A label of half-height `h` centered on a circle of radius `r` spans the
//!   annulus `[r − h, r + h]`. Its width along the inner arc is `2h / aspect`,
//!   so it covers half-angle `δ(h) = (2h/aspect) / (2(r − h))`.
//! - A boundary segment at radial clearance `ds` from the circle caps the
//!   height at `h = min(ds, h_max)`. The ceiling
//!   `h_max = aspect·π·r / (1 + aspect·π)` is where `δ` reaches π and the
//!   label would wrap the full circle.
//! - Wedges are measured in half-angle units: a wedge's height is `δ(h)` and
//!   its ascend rate is 1, so the sweep's straight-line growth is exact.
//!   `height_at_half_angle` maps a sweep height back to `h`.
//!
//! Angles are in radians. Intervals never wrap: a segment whose angular
//! extent exceeds π is split into two wedges on either side of the seam.
//!
//! Code cross-refs: `sweep::solve_placement` (consumer), `geom::Circle`

use std::f64::consts::{PI, TAU};

use crate::error::{LabelError, Result};
use crate::geom::{point_angle, Circle, GeomCfg, Segment};

/// Height ceiling for one angular interval.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    height: f64,
    lo: f64,
    hi: f64,
    ascend: f64,
}

impl Wedge {
    /// Requires finite `lo < hi`, finite `height >= 0`, finite `ascend > 0`.
    pub fn new(height: f64, lo: f64, hi: f64, ascend: f64) -> Result<Self> {
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(LabelError::IllFormedWedge { lo, hi });
        }
        if !(height.is_finite() && height >= 0.0 && ascend.is_finite() && ascend > 0.0) {
            return Err(LabelError::IllFormedWedgeRate { height, ascend });
        }
        Ok(Self {
            height,
            lo,
            hi,
            ascend,
        })
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }
    #[inline]
    pub fn lo(&self) -> f64 {
        self.lo
    }
    #[inline]
    pub fn hi(&self) -> f64 {
        self.hi
    }
    #[inline]
    pub fn ascend(&self) -> f64 {
        self.ascend
    }
    #[inline]
    pub fn span(&self) -> f64 {
        self.hi - self.lo
    }

    /// Same wedge with its interval moved by `offset` radians.
    #[inline]
    pub fn shifted(&self, offset: f64) -> Self {
        Self {
            lo: self.lo + offset,
            hi: self.hi + offset,
            ..*self
        }
    }
}

fn check_aspect(aspect: f64) -> Result<()> {
    if aspect.is_finite() && aspect > 0.0 {
        Ok(())
    } else {
        Err(LabelError::InvalidAspect { aspect })
    }
}

/// Largest half-height whose label still fits around the circle.
#[inline]
pub fn height_ceiling(radius: f64, aspect: f64) -> f64 {
    aspect * PI * radius / (1.0 + aspect * PI)
}

/// Half-angle covered by a label of half-height `h`.
#[inline]
pub fn half_angle(height: f64, radius: f64, aspect: f64) -> f64 {
    (2.0 * height / aspect) / (2.0 * (radius - height))
}

/// Inverse of [`half_angle`]: `h(α) = aspect·r·α / (1 + aspect·α)`.
#[inline]
pub fn height_at_half_angle(alpha: f64, radius: f64, aspect: f64) -> f64 {
    aspect * radius * alpha / (1.0 + aspect * alpha)
}

fn widened(lo: f64, hi: f64, min_span: f64) -> (f64, f64) {
    if hi - lo >= min_span {
        (lo, hi)
    } else {
        let mid = 0.5 * (lo + hi);
        (mid - 0.5 * min_span, mid + 0.5 * min_span)
    }
}

/// Room between the circle and a segment, measured radially.
///
/// Entirely outside the circle: gap `dseg − r`. Entirely inside: `r` minus the
/// farther endpoint distance. Crossing or touching: `0`.
pub fn signed_clearance(circle: &Circle, segment: &Segment) -> f64 {
    let (c, r) = (circle.center(), circle.radius());
    let d0 = (segment.a - c).norm();
    let d1 = (segment.b - c).norm();
    let dseg = segment.distance_to(c);
    if d0 > r && d1 > r && dseg > r {
        dseg - r
    } else if d0 < r && d1 < r && dseg < r {
        r - d0.max(d1)
    } else {
        0.0
    }
}

/// One or two wedges for a single boundary segment, in half-angle units.
pub fn segment_wedges(
    circle: &Circle,
    segment: &Segment,
    aspect: f64,
    geom: GeomCfg,
) -> Result<Vec<Wedge>> {
    check_aspect(aspect)?;
    let (c, r) = (circle.center(), circle.radius());
    let h = signed_clearance(circle, segment).min(height_ceiling(r, aspect));
    let delta = half_angle(h, r, aspect);

    let (ta, tb) = (point_angle(c, segment.a), point_angle(c, segment.b));
    let (a, b) = if ta <= tb { (ta, tb) } else { (tb, ta) };

    let spans: Vec<(f64, f64)> = if b - a > PI {
        // the segment crosses the seam at ±π: cover [b, a + 2π] in two halves
        vec![(b - delta, a + TAU + delta), (b - TAU - delta, a + delta)]
    } else {
        vec![(a - delta, b + delta)]
    };
    spans
        .into_iter()
        .map(|(lo, hi)| {
            let (lo, hi) = widened(lo, hi, geom.eps_angle);
            Wedge::new(delta, lo, hi, 1.0)
        })
        .collect()
}

/// Wedges for every boundary segment about `circle`, default tolerances.
pub fn compute_wedges(circle: &Circle, segments: &[Segment], aspect: f64) -> Result<Vec<Wedge>> {
    compute_wedges_with(circle, segments, aspect, GeomCfg::default())
}

pub fn compute_wedges_with(
    circle: &Circle,
    segments: &[Segment],
    aspect: f64,
    geom: GeomCfg,
) -> Result<Vec<Wedge>> {
    check_aspect(aspect)?;
    let mut out = Vec::with_capacity(segments.len() * 2);
    for s in segments {
        out.extend(segment_wedges(circle, s, aspect, geom)?);
    }
    Ok(out)
}

/// Each wedge plus copies shifted by `±2π`, so the sweep over `[−2π, 2π]`
/// sees every ceiling that reaches across the seam.
pub fn replicate_wrapped(wedges: &[Wedge]) -> Vec<Wedge> {
    let mut out = Vec::with_capacity(wedges.len() * 3);
    out.extend_from_slice(wedges);
    out.extend(wedges.iter().map(|w| w.shifted(-TAU)));
    out.extend(wedges.iter().map(|w| w.shifted(TAU)));
    out
}
