//! Clearance-annotated skeleton graph and shortest-path queries.
//!
//! Nodes are interned by exact coordinates, so edges sharing an endpoint share
//! a node. Edge weights drive Dijkstra; clearances drive threshold filtering.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::geom::Point;

/// Identifier of an interned skeleton node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Input edge as produced by the external skeleton builder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphEdge {
    pub u: Point,
    pub v: Point,
    pub weight: f64,
    /// Distance to the nearest boundary along this skeleton edge.
    pub clearance: f64,
}

impl GraphEdge {
    pub fn new(u: Point, v: Point, weight: f64, clearance: f64) -> Self {
        Self {
            u,
            v,
            weight,
            clearance,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct EdgeData {
    from: NodeId,
    to: NodeId,
    weight: f64,
    clearance: f64,
}

/// Undirected weighted graph over skeleton points.
#[derive(Clone, Debug, Default)]
pub struct SkeletonGraph {
    nodes: Vec<Point>,
    edges: Vec<EdgeData>,
    adj: Vec<Vec<usize>>, // edge indices incident to node k
}

/// Result of a (multi-source) Dijkstra run.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    pub dist: Vec<f64>,
    pub pred: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    /// Reachable node with the largest distance (first on ties).
    pub fn farthest(&self) -> Option<(NodeId, f64)> {
        let mut best: Option<(NodeId, f64)> = None;
        for (k, &d) in self.dist.iter().enumerate() {
            if d.is_finite() && best.is_none_or(|(_, bd)| d > bd) {
                best = Some((NodeId(k), d));
            }
        }
        best
    }

    /// Node ids from the source that reached `target` to `target` itself.
    pub fn path_to(&self, target: NodeId) -> Vec<NodeId> {
        let mut out = vec![target];
        let mut cur = target;
        while let Some(p) = self.pred[cur.0] {
            out.push(p);
            cur = p;
        }
        out.reverse();
        out
    }
}

#[derive(Clone, Copy, Debug)]
struct QueueItem {
    dist: f64,
    node: usize,
}

impl PartialEq for QueueItem {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for QueueItem {}
impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for QueueItem {
    // min-heap on distance, then node index for determinism
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .dist
            .total_cmp(&self.dist)
            .then_with(|| other.node.cmp(&self.node))
    }
}

#[inline]
pub(crate) fn point_key(p: Point) -> (u64, u64) {
    // +0.0 and -0.0 must intern to the same node
    ((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
}

impl SkeletonGraph {
    /// Build from edge records. Edges with non-finite or negative weight, or
    /// non-finite clearance, are dropped.
    pub fn from_edges(edges: &[GraphEdge]) -> Self {
        let mut g = SkeletonGraph::default();
        let mut index: HashMap<(u64, u64), NodeId> = HashMap::new();
        let mut dropped = 0usize;
        for e in edges {
            if !e.weight.is_finite() || e.weight < 0.0 || !e.clearance.is_finite() {
                dropped += 1;
                continue;
            }
            let from = g.intern(&mut index, e.u);
            let to = g.intern(&mut index, e.v);
            let idx = g.edges.len();
            g.edges.push(EdgeData {
                from,
                to,
                weight: e.weight,
                clearance: e.clearance,
            });
            g.adj[from.0].push(idx);
            if to != from {
                g.adj[to.0].push(idx);
            }
        }
        if dropped > 0 {
            tracing::debug!(dropped, kept = g.edges.len(), "skeleton edges dropped");
        }
        g
    }

    fn intern(&mut self, index: &mut HashMap<(u64, u64), NodeId>, p: Point) -> NodeId {
        *index.entry(point_key(p)).or_insert_with(|| {
            self.nodes.push(p);
            self.adj.push(Vec::new());
            NodeId(self.nodes.len() - 1)
        })
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
    #[inline]
    pub fn point(&self, n: NodeId) -> Point {
        self.nodes[n.0]
    }

    /// Edge records, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = GraphEdge> + '_ {
        self.edges.iter().map(|e| GraphEdge {
            u: self.nodes[e.from.0],
            v: self.nodes[e.to.0],
            weight: e.weight,
            clearance: e.clearance,
        })
    }

    /// `(min, max)` edge clearance, or `None` for an edgeless graph.
    pub fn clearance_range(&self) -> Option<(f64, f64)> {
        self.edges.iter().fold(None, |acc, e| match acc {
            None => Some((e.clearance, e.clearance)),
            Some((lo, hi)) => Some((lo.min(e.clearance), hi.max(e.clearance))),
        })
    }

    /// Subgraph of edges with `clearance >= min_clearance` (nodes re-interned).
    pub fn filter_by_clearance(&self, min_clearance: f64) -> SkeletonGraph {
        let kept: Vec<GraphEdge> = self
            .edges()
            .filter(|e| e.clearance >= min_clearance)
            .collect();
        SkeletonGraph::from_edges(&kept)
    }

    /// Connected components as node lists, ordered by their smallest node id.
    pub fn components(&self) -> Vec<Vec<NodeId>> {
        let n = self.nodes.len();
        let mut seen = vec![false; n];
        let mut out = Vec::new();
        for s in 0..n {
            if seen[s] {
                continue;
            }
            seen[s] = true;
            let mut comp = vec![NodeId(s)];
            let mut stack = vec![s];
            while let Some(u) = stack.pop() {
                for &eidx in &self.adj[u] {
                    let w = self.other_end(eidx, u);
                    if !seen[w] {
                        seen[w] = true;
                        comp.push(NodeId(w));
                        stack.push(w);
                    }
                }
            }
            comp.sort();
            out.push(comp);
        }
        out
    }

    /// Number of edges inside `comp`, a sorted node list from [`Self::components`].
    pub fn edge_count_in(&self, comp: &[NodeId]) -> usize {
        self.edges
            .iter()
            .filter(|e| comp.binary_search(&e.from).is_ok())
            .count()
    }

    #[inline]
    fn other_end(&self, eidx: usize, u: usize) -> usize {
        let e = &self.edges[eidx];
        if e.from.0 == u {
            e.to.0
        } else {
            e.from.0
        }
    }

    /// Multi-source Dijkstra by edge weight. Unreachable nodes keep `dist = ∞`.
    pub fn shortest_paths(&self, sources: &[NodeId]) -> ShortestPaths {
        let n = self.nodes.len();
        let mut dist = vec![f64::INFINITY; n];
        let mut pred: Vec<Option<NodeId>> = vec![None; n];
        let mut heap = BinaryHeap::new();
        for s in sources {
            if dist[s.0] != 0.0 {
                dist[s.0] = 0.0;
                heap.push(QueueItem {
                    dist: 0.0,
                    node: s.0,
                });
            }
        }
        while let Some(QueueItem { dist: d, node: u }) = heap.pop() {
            if d > dist[u] {
                continue;
            }
            for &eidx in &self.adj[u] {
                let w = self.other_end(eidx, u);
                let nd = d + self.edges[eidx].weight;
                if nd < dist[w] {
                    dist[w] = nd;
                    pred[w] = Some(NodeId(u));
                    heap.push(QueueItem { dist: nd, node: w });
                }
            }
        }
        ShortestPaths { dist, pred }
    }

    /// Node farthest from `sources`, if that distance is positive.
    pub fn most_distant_node(&self, sources: &[NodeId]) -> Option<NodeId> {
        let sp = self.shortest_paths(sources);
        match sp.farthest() {
            Some((n, d)) if d > 0.0 => Some(n),
            _ => None,
        }
    }

    /// Node ids to coordinates.
    pub fn points_of(&self, ids: &[NodeId]) -> Vec<Point> {
        ids.iter().map(|&n| self.nodes[n.0]).collect()
    }
}
