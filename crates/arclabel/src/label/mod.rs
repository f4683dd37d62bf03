//! Label placement on fitted circles.
//!
//! Purpose
//! - Fit a baseline circle to each candidate path (`circle_fit`).
//! - Turn every boundary segment into an angular height ceiling (`wedge`).
//! - Sweep the ceilings to find locally maximal heights (`sweep`).
//! - Score and pick one placement across circles (`select`, `pipeline`).
//!
//! Code cross-refs: `skeleton::extract_candidates`, `geom::solvers`

mod circle_fit;
mod pipeline;
mod select;
mod sweep;
mod wedge;

pub use circle_fit::{fit_circle, fit_circle_with};
pub use pipeline::{best_placement, evaluate_circle, place_label, LabelCfg, GLYPH_ASPECT};
pub use select::{best_for_circle, placement_score, select_best, Placement};
pub use sweep::{solve_placement, Candidate, Interval, Sweep};
pub use wedge::{
    compute_wedges, compute_wedges_with, half_angle, height_at_half_angle, height_ceiling,
    replicate_wrapped, segment_wedges, signed_clearance, Wedge,
};
