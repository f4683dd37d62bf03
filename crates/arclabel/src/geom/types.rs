//! Basic 2D value types and tolerances shared by the placement stages.
//!
//! - `GeomCfg`: centralizes epsilons for distance, angle and collinearity checks.
//! - `Segment`: a boundary edge with distance/angle helpers about a center.
//! - `Circle`: validated center/radius pair used as the label baseline.
//! - `Path`: ordered polyline through the skeleton.
//!
//! Code cross-refs: `util::{point_segment_distance, point_angle}`, `label::wedge`

use nalgebra::Vector2;

use crate::error::{LabelError, Result};

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Points closer than this are considered identical.
    pub eps_dist: f64,
    /// Minimum angular width of a wedge interval (radians).
    pub eps_angle: f64,
    /// Relative cross-product threshold below which a point set is collinear.
    pub eps_collinear: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_dist: 1e-12,
            eps_angle: 1e-12,
            eps_collinear: 1e-12,
        }
    }
}

/// Boundary edge `a → b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        (self.b - self.a).norm()
    }
    /// Euclidean distance from `p` to the closed segment.
    #[inline]
    pub fn distance_to(&self, p: Point) -> f64 {
        super::util::point_segment_distance(p, self.a, self.b)
    }
}

/// Circle with strictly positive, finite radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 || !center.x.is_finite() || !center.y.is_finite()
        {
            return Err(LabelError::InvalidCircle { radius });
        }
        Ok(Self { center, radius })
    }
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    /// Point on the circle at polar angle `theta` about the center.
    #[inline]
    pub fn polar_point(&self, theta: f64) -> Point {
        self.center + Vector2::new(theta.cos(), theta.sin()) * self.radius
    }
}

/// Ordered polyline. Length is the sum of consecutive Euclidean distances.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub points: Vec<Point>,
}

impl Path {
    #[inline]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}
