//! Candidate path extraction over a clearance-filtered skeleton graph.
//!
//! Model
//! - A label of half-height ~D needs a skeleton stretch of length at least
//!   `D / aspect`. Filtering to edges with clearance ≥ D keeps only the wide
//!   parts of the shape; long paths there are label candidates.
//! - "Longest path" is the two-pass double-sweep heuristic: farthest node from
//!   an arbitrary start, then farthest node from that. It approximates the
//!   diameter on trees and is only a heuristic on general graphs.
//! - Diversity: after the first path, the next source is the node farthest
//!   from everything already covered.
//!
//! Code cross-refs: `graph::SkeletonGraph`, `resample::resample`

use std::collections::HashSet;

use crate::geom::Path;

use super::graph::{point_key, NodeId, SkeletonGraph};
use super::resample::resample;

/// How clearance thresholds are explored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PathMode {
    /// Shrink one threshold until the longest path is long enough, then
    /// extract up to `k` paths at that threshold.
    #[default]
    SingleScale,
    /// Collect qualifying paths across a geometric sequence of thresholds.
    MultiScale,
}

/// Path extraction configuration.
#[derive(Clone, Copy, Debug)]
pub struct PathCfg {
    /// Maximum number of candidates returned.
    pub k: usize,
    /// Target label height-to-width ratio.
    pub aspect: f64,
    pub mode: PathMode,
    /// Single-scale threshold divisor per retry.
    pub shrink: f64,
    /// Single-scale retry budget.
    pub max_shrinks: usize,
    /// Multi-scale threshold divisor per scale.
    pub scale_step: f64,
    /// Multi-scale scale budget.
    pub max_scales: usize,
    /// Points per resampled output path.
    pub samples: usize,
}

impl Default for PathCfg {
    fn default() -> Self {
        Self {
            k: 10,
            aspect: 0.2,
            mode: PathMode::SingleScale,
            shrink: 1.4,
            max_shrinks: 64,
            scale_step: 2.0,
            max_scales: 10,
            samples: super::resample::DEFAULT_SAMPLES,
        }
    }
}

/// A node path together with its polyline length.
#[derive(Clone, Debug)]
struct NodePath {
    nodes: Vec<NodeId>,
    length: f64,
}

/// Up to `k` resampled candidate paths (single-scale mode, 20 samples).
pub fn extract_candidates(graph: &SkeletonGraph, k: usize, aspect: f64) -> Vec<Path> {
    extract_candidates_with(
        graph,
        &PathCfg {
            k,
            aspect,
            ..PathCfg::default()
        },
    )
}

/// Candidate extraction with explicit configuration. Never fails: edgeless
/// graphs, `k == 0`, or a non-positive aspect give an empty result.
pub fn extract_candidates_with(graph: &SkeletonGraph, cfg: &PathCfg) -> Vec<Path> {
    if graph.edge_count() == 0 || cfg.k == 0 {
        return Vec::new();
    }
    if !(cfg.aspect.is_finite() && cfg.aspect > 0.0) {
        tracing::debug!(aspect = cfg.aspect, "non-positive aspect, no candidates");
        return Vec::new();
    }
    let (filtered, paths) = match cfg.mode {
        PathMode::SingleScale => single_scale(graph, cfg),
        PathMode::MultiScale => multi_scale(graph, cfg),
    };
    tracing::debug!(mode = ?cfg.mode, found = paths.len(), "path candidates");
    paths
        .iter()
        .map(|(g_idx, p)| {
            let g = &filtered[*g_idx];
            resample(&Path::new(g.points_of(&p.nodes)), cfg.samples)
        })
        .collect()
}

fn node_path(g: &SkeletonGraph, nodes: Vec<NodeId>) -> NodePath {
    let length = Path::new(g.points_of(&nodes)).length();
    NodePath { nodes, length }
}

/// Double sweep from `source`, or from the node farthest from `start` when no
/// source is given. `None` if nothing is reachable at positive distance.
fn longest_path(g: &SkeletonGraph, start: NodeId, source: Option<NodeId>) -> Option<NodePath> {
    let source = match source {
        Some(s) => s,
        None => g.most_distant_node(&[start])?,
    };
    let sp = g.shortest_paths(&[source]);
    match sp.farthest() {
        Some((target, d)) if d > 0.0 => Some(node_path(g, sp.path_to(target))),
        _ => None,
    }
}

/// Up to `k` diverse long paths inside one connected component.
///
/// With `min_length`, stops at the first path not longer than it.
fn long_paths_in_component(
    g: &SkeletonGraph,
    comp: &[NodeId],
    k: usize,
    min_length: Option<f64>,
) -> Vec<NodePath> {
    let mut out = Vec::new();
    let long_enough = |p: &NodePath| min_length.is_none_or(|m| p.length > m);
    let Some(first) = comp.first().and_then(|&s| longest_path(g, s, None)) else {
        return out;
    };
    if !long_enough(&first) {
        return out;
    }
    let mut covered: Vec<NodeId> = first.nodes.clone();
    out.push(first);
    while out.len() < k {
        let Some(next) = g.most_distant_node(&covered) else {
            break;
        };
        let Some(path) = longest_path(g, next, Some(next)) else {
            break;
        };
        if !long_enough(&path) {
            break;
        }
        covered.extend(path.nodes.iter().copied());
        out.push(path);
    }
    out
}

fn longest_over_components(g: &SkeletonGraph) -> f64 {
    g.components()
        .iter()
        .filter_map(|c| c.first().and_then(|&s| longest_path(g, s, None)))
        .map(|p| p.length)
        .fold(0.0, f64::max)
}

/// Returns the filtered graphs used and `(graph index, path)` pairs.
fn single_scale(
    graph: &SkeletonGraph,
    cfg: &PathCfg,
) -> (Vec<SkeletonGraph>, Vec<(usize, NodePath)>) {
    let Some((min_c, max_c)) = graph.clearance_range() else {
        return (Vec::new(), Vec::new());
    };
    let mut d = max_c;
    let mut filtered = graph.filter_by_clearance(d);
    for _ in 0..cfg.max_shrinks {
        let len = longest_over_components(&filtered);
        // len / d >= 1 / aspect, written without dividing by d
        if len * cfg.aspect >= d || d <= min_c {
            break;
        }
        d = (d / cfg.shrink).max(min_c);
        tracing::debug!(threshold = d, longest = len, "shrinking clearance threshold");
        filtered = graph.filter_by_clearance(d);
    }
    let mut paths: Vec<NodePath> = filtered
        .components()
        .iter()
        .flat_map(|c| long_paths_in_component(&filtered, c, cfg.k, None))
        .collect();
    paths.sort_by(|a, b| b.length.total_cmp(&a.length));
    paths.truncate(cfg.k);
    (vec![filtered], paths.into_iter().map(|p| (0, p)).collect())
}

fn multi_scale(
    graph: &SkeletonGraph,
    cfg: &PathCfg,
) -> (Vec<SkeletonGraph>, Vec<(usize, NodePath)>) {
    let Some((_, max_c)) = graph.clearance_range() else {
        return (Vec::new(), Vec::new());
    };
    let mut graphs = Vec::new();
    let mut cands: Vec<(usize, NodePath)> = Vec::new();
    let mut seen: HashSet<Vec<(u64, u64)>> = HashSet::new();
    let mut d = max_c;
    for _ in 0..cfg.max_scales {
        let min_length = d / cfg.aspect;
        let fg = graph.filter_by_clearance(d);
        let g_idx = graphs.len();
        for comp in fg.components() {
            // single-edge components are never candidates here
            if fg.edge_count_in(&comp) < 2 {
                continue;
            }
            for p in long_paths_in_component(&fg, &comp, cfg.k, Some(min_length)) {
                // same polyline found again at a lower threshold
                let key: Vec<(u64, u64)> =
                    fg.points_of(&p.nodes).into_iter().map(point_key).collect();
                let mut rev = key.clone();
                rev.reverse();
                if seen.contains(&key) || seen.contains(&rev) {
                    continue;
                }
                seen.insert(key);
                cands.push((g_idx, p));
            }
        }
        graphs.push(fg);
        if cands.len() >= cfg.k {
            break;
        }
        d /= cfg.scale_step;
    }
    cands.truncate(cfg.k);
    (graphs, cands)
}
