use super::*;
use nalgebra::{vector, Vector2};
use std::f64::consts::{FRAC_PI_2, PI};

fn unit_square() -> Vec<Segment> {
    let pts = [
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        vector![0.0, 1.0],
    ];
    (0..4).map(|k| Segment::new(pts[k], pts[(k + 1) % 4])).collect()
}

#[test]
fn segment_distance_interior_and_endpoint() {
    let a = vector![0.0, 0.0];
    let b = vector![2.0, 0.0];
    assert!((point_segment_distance(vector![1.0, 3.0], a, b) - 3.0).abs() < 1e-12);
    // beyond b: distance to the endpoint
    assert!((point_segment_distance(vector![5.0, 4.0], a, b) - 5.0).abs() < 1e-12);
    // degenerate segment
    assert!((point_segment_distance(vector![3.0, 4.0], a, a) - 5.0).abs() < 1e-12);
}

#[test]
fn angles_and_normalization() {
    let c = vector![1.0, 1.0];
    assert!((point_angle(c, vector![1.0, 2.0]) - FRAC_PI_2).abs() < 1e-12);
    assert!((normalize_angle(2.5 * PI) - FRAC_PI_2).abs() < 1e-12);
    assert!((normalize_angle(-FRAC_PI_2 - 2.0 * PI) + FRAC_PI_2).abs() < 1e-12);
    assert!(normalize_angle(-PI) > 0.0);
}

#[test]
fn circle_rejects_bad_radius() {
    assert!(Circle::new(Vector2::zeros(), 0.0).is_err());
    assert!(Circle::new(Vector2::zeros(), f64::NAN).is_err());
    let c = Circle::new(vector![1.0, 0.0], 2.0).unwrap();
    let p = c.polar_point(FRAC_PI_2);
    assert!((p - vector![1.0, 2.0]).norm() < 1e-12);
}

#[test]
fn path_length_sums_segments() {
    let p = Path::new(vec![vector![0.0, 0.0], vector![3.0, 4.0], vector![3.0, 0.0]]);
    assert!((p.length() - 9.0).abs() < 1e-12);
    assert_eq!(Path::default().length(), 0.0);
}

#[test]
fn even_odd_containment_with_hole() {
    let mut segs = unit_square();
    // hole: [0.4, 0.6]^2
    let hole = vec![
        vector![0.4, 0.4],
        vector![0.6, 0.4],
        vector![0.6, 0.6],
        vector![0.4, 0.6],
        vector![0.4, 0.4],
    ];
    segs.extend(polylines_to_segments(&[hole]));
    assert!(inside_boundary(vector![0.2, 0.5], &segs));
    assert!(!inside_boundary(vector![0.5, 0.5], &segs));
    assert!(!inside_boundary(vector![1.5, 0.5], &segs));
}

#[test]
fn collinearity_check() {
    let line = vec![vector![0.0, 0.0], vector![1.0, 1.0], vector![3.0, 3.0]];
    assert!(all_collinear(&line, 1e-12));
    let tri = vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    assert!(!all_collinear(&tri, 1e-12));
}

#[test]
fn least_squares_linear_residuals() {
    // f1 = x - 1, f2 = y + 2, f3 = x + y + 1  → minimizer (1, -2)
    let res = |x: Vector2<f64>| {
        Some(vec![
            (x.x - 1.0, vector![1.0, 0.0]),
            (x.y + 2.0, vector![0.0, 1.0]),
            (x.x + x.y + 1.0, vector![1.0, 1.0]),
        ])
    };
    let rep = least_squares_2d(res, vector![10.0, 10.0], LmCfg::default()).expect("converges");
    assert!((rep.x - vector![1.0, -2.0]).norm() < 1e-8);
    assert!(rep.cost < 1e-16);
}

#[test]
fn least_squares_reports_failure_on_bad_evaluation() {
    let res = |_: Vector2<f64>| -> Option<solvers::Rows> { None };
    assert!(least_squares_2d(res, Vector2::zeros(), LmCfg::default()).is_none());
}
