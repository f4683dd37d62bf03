//! Skeleton graph, candidate paths, and path resampling.
//!
//! Purpose
//! - Hold the clearance-annotated skeleton graph produced by an external
//!   medial-axis builder (`SkeletonGraph`).
//! - Extract a small, diverse set of long paths through its wide parts
//!   (`extract_candidates`), resampled to a fixed point count.
//!
//! Code cross-refs: `label::place_label` (consumer), `geom::Path`

mod graph;
mod paths;
mod resample;

pub use graph::{GraphEdge, NodeId, ShortestPaths, SkeletonGraph};
pub use paths::{extract_candidates, extract_candidates_with, PathCfg, PathMode};
pub use resample::{resample, DEFAULT_SAMPLES};
