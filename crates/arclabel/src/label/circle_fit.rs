//! Circle fitting to a resampled skeleton path.
//!
//! Minimizes the variance of point-to-center distances: residuals are
//! `|pᵢ − c| − mean_j |p_j − c|`, solved over the center `c` by
//! Levenberg–Marquardt from the centroid. The radius is the mean distance at
//! the optimum.

use nalgebra::Vector2;

use crate::error::{LabelError, Result};
use crate::geom::{all_collinear, least_squares_2d, Circle, GeomCfg, LmCfg, Point};

/// Fit with default tolerances.
pub fn fit_circle(points: &[Point]) -> Result<Circle> {
    fit_circle_with(points, GeomCfg::default(), LmCfg::default())
}

fn distinct_count(points: &[Point], eps: f64) -> usize {
    let mut distinct: Vec<Point> = Vec::with_capacity(points.len());
    for &p in points {
        if distinct.iter().all(|q| (p - q).norm() > eps) {
            distinct.push(p);
            if distinct.len() >= 3 {
                break;
            }
        }
    }
    distinct.len()
}

fn distances(points: &[Point], c: Vector2<f64>) -> Vec<f64> {
    points.iter().map(|p| (p - c).norm()).collect()
}

/// Fit with explicit tolerances and solver budget.
///
/// Fails with `DegenerateCircleFit` for fewer than 3 distinct points, collinear
/// input, or solver non-convergence. No retry.
pub fn fit_circle_with(points: &[Point], geom: GeomCfg, lm: LmCfg) -> Result<Circle> {
    if distinct_count(points, geom.eps_dist) < 3 {
        return Err(LabelError::DegenerateCircleFit {
            reason: "fewer than 3 distinct points",
        });
    }
    if all_collinear(points, geom.eps_collinear) {
        return Err(LabelError::DegenerateCircleFit {
            reason: "collinear points",
        });
    }
    let n = points.len() as f64;
    let centroid = points.iter().fold(Vector2::zeros(), |acc, p| acc + p) / n;

    let residuals = |c: Vector2<f64>| {
        let d = distances(points, c);
        let mean_d = d.iter().sum::<f64>() / n;
        let units: Vec<Vector2<f64>> = points
            .iter()
            .zip(&d)
            .map(|(p, &di)| if di > 0.0 { (p - c) / di } else { Vector2::zeros() })
            .collect();
        let mean_u = units.iter().fold(Vector2::zeros(), |acc, u| acc + u) / n;
        let rows: Vec<(f64, Vector2<f64>)> = d
            .iter()
            .zip(&units)
            .map(|(&di, u)| (di - mean_d, mean_u - u))
            .collect();
        rows.iter()
            .all(|(f, g)| f.is_finite() && g.x.is_finite() && g.y.is_finite())
            .then_some(rows)
    };

    let report = least_squares_2d(residuals, centroid, lm).ok_or(
        LabelError::DegenerateCircleFit {
            reason: "solver did not converge",
        },
    )?;
    let radius = distances(points, report.x).iter().sum::<f64>() / n;
    tracing::trace!(
        cx = report.x.x,
        cy = report.x.y,
        radius,
        cost = report.cost,
        iterations = report.iterations,
        "circle fit"
    );
    Circle::new(report.x, radius).map_err(|_| LabelError::DegenerateCircleFit {
        reason: "non-finite radius",
    })
}
