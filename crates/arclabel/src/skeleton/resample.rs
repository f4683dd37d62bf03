//! Arc-length re-parametrization of polylines.

use crate::geom::{Path, Point};

/// Default number of points per resampled candidate path.
pub const DEFAULT_SAMPLES: usize = 20;

/// `n` points evenly spaced by arc length along `path` (endpoints included).
///
/// Edge cases: empty path or `n == 0` → empty; a zero-length path repeats its
/// first point `n` times.
pub fn resample(path: &Path, n: usize) -> Path {
    let pts = &path.points;
    if n == 0 || pts.is_empty() {
        return Path::default();
    }
    let mut cum = Vec::with_capacity(pts.len());
    let mut acc = 0.0;
    cum.push(0.0);
    for w in pts.windows(2) {
        acc += (w[1] - w[0]).norm();
        cum.push(acc);
    }
    let total = acc;
    if n == 1 || total <= 0.0 {
        return Path::new(vec![pts[0]; n]);
    }
    let last = pts.len() - 1;
    let out: Vec<Point> = (0..n)
        .map(|i| {
            if i == n - 1 {
                return pts[last];
            }
            let t = total * (i as f64) / ((n - 1) as f64);
            // first vertex at or beyond t; zero-length segments are skipped
            let j = cum.partition_point(|&c| c < t);
            if j == 0 {
                return pts[0];
            }
            let j = j.min(last);
            let seg = cum[j] - cum[j - 1];
            let frac = if seg > 0.0 { (t - cum[j - 1]) / seg } else { 0.0 };
            pts[j - 1] + (pts[j] - pts[j - 1]) * frac
        })
        .collect();
    Path::new(out)
}
