use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use super::types::{Point, Segment};

/// Polar angle of `q` seen from `p`, in (-π, π].
#[inline]
pub fn point_angle(p: Point, q: Point) -> f64 {
    (q.y - p.y).atan2(q.x - p.x)
}

/// Euclidean distance from `p` to the closed segment `[a, b]`.
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 <= 0.0 {
        return (p - a).norm();
    }
    let t = ((p - a).dot(&ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).norm()
}

/// Map an angle into (-π, π].
#[inline]
pub fn normalize_angle(theta: f64) -> f64 {
    let mut a = theta.rem_euclid(TAU);
    if a > PI {
        a -= TAU;
    }
    a
}

#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

/// True if every point lies on one line (relative to the squared extent of the set).
pub fn all_collinear(points: &[Point], eps: f64) -> bool {
    if points.len() < 3 {
        return true;
    }
    let p0 = points[0];
    let far = points
        .iter()
        .copied()
        .max_by(|a, b| (a - p0).norm_squared().total_cmp(&(b - p0).norm_squared()))
        .unwrap_or(p0);
    let extent2 = (far - p0).norm_squared();
    if extent2 <= 0.0 {
        return true;
    }
    points
        .iter()
        .all(|&q| cross(p0, far, q).abs() <= eps * extent2)
}

/// Even-odd containment of `p` in the region bounded by `segments`.
///
/// Works for polygons with holes as long as every ring is present as segments.
pub fn inside_boundary(p: Point, segments: &[Segment]) -> bool {
    let mut inside = false;
    for s in segments {
        let (a, b) = (s.a, s.b);
        if (a.y > p.y) != (b.y > p.y) {
            let x_at = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
            if p.x < x_at {
                inside = !inside;
            }
        }
    }
    inside
}

/// Consecutive-point segments of every polyline, in order.
pub fn polylines_to_segments(polylines: &[Vec<Point>]) -> Vec<Segment> {
    polylines
        .iter()
        .flat_map(|pl| pl.windows(2).map(|w| Segment::new(w[0], w[1])))
        .collect()
}
