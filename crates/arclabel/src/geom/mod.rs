//! Shared 2D geometry for the placement engine.
//!
//! Purpose
//! - Provide the value types every stage passes around (`Point`, `Segment`,
//!   `Circle`, `Path`) and the tolerances they are checked against (`GeomCfg`).
//! - Provide the collaborator primitives the stages consume: point/segment
//!   distance, polar angles, even-odd containment, and a 2-parameter
//!   Levenberg–Marquardt solver.
//!
//! Code cross-refs: `label::{circle_fit, wedge}`, `skeleton::resample`

pub mod solvers;
mod types;
mod util;

pub use solvers::{least_squares_2d, LmCfg, LmReport};
pub use types::{Circle, GeomCfg, Path, Point, Segment};
pub use util::{
    all_collinear, inside_boundary, normalize_angle, point_angle, point_segment_distance,
    polylines_to_segments,
};

#[cfg(test)]
mod tests;
