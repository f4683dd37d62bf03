//! Curated surface for the command-line crate and benches.
//!
//! Mirrors the stage order of the placement pipeline. Prefer these re-exports
//! over reaching into submodules.

// geometry
pub use crate::geom::{
    inside_boundary, normalize_angle, polylines_to_segments, Circle, GeomCfg, LmCfg, Path, Point,
    Segment,
};
// skeleton paths
pub use crate::skeleton::{
    extract_candidates, extract_candidates_with, resample, GraphEdge, PathCfg, PathMode,
    SkeletonGraph, DEFAULT_SAMPLES,
};
// placement
pub use crate::label::{
    best_placement, compute_wedges, fit_circle, place_label, replicate_wrapped, select_best,
    solve_placement, Candidate, LabelCfg, Placement, Wedge, GLYPH_ASPECT,
};
// synthetic corridors
pub use crate::rand::{
    corridor, draw_corridor, Corridor, CorridorCfg, ReplayToken as CorridorReplay,
};
