//! File formats: skeleton edge CSV in, request JSON in, placement JSON out.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use arclabel::api::{polylines_to_segments, GraphEdge, Placement, Point, Segment};
use nalgebra::Vector2;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// Required columns of the skeleton edge table, in `GraphEdge` order.
pub const EDGE_COLUMNS: [&str; 6] = ["px", "py", "qx", "qy", "weight", "clearance"];

/// Read skeleton edges. Missing cells become NaN and the edge is dropped
/// when the graph is built.
pub fn read_edges_csv(path: &Path) -> Result<Vec<GraphEdge>> {
    let lf = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .select(
            EDGE_COLUMNS
                .iter()
                .map(|c| col(*c).cast(DataType::Float64))
                .collect::<Vec<_>>(),
        )
        .collect()
        .with_context(|| format!("reading edge columns from {}", path.display()))?;
    let cols = EDGE_COLUMNS
        .iter()
        .map(|c| -> Result<Vec<f64>> {
            Ok(df
                .column(c)?
                .f64()?
                .into_iter()
                .map(|v| v.unwrap_or(f64::NAN))
                .collect())
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((0..df.height())
        .map(|i| {
            GraphEdge::new(
                Vector2::new(cols[0][i], cols[1][i]),
                Vector2::new(cols[2][i], cols[3][i]),
                cols[4][i],
                cols[5][i],
            )
        })
        .collect())
}

/// Placement request: boundary polylines and the label text.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Request {
    pub poly: Vec<Vec<[f64; 2]>>,
    #[serde(default)]
    pub text: String,
}

impl Request {
    /// Consecutive points of every polyline as boundary segments.
    pub fn segments(&self) -> Vec<Segment> {
        let polylines: Vec<Vec<Point>> = self
            .poly
            .iter()
            .map(|pl| pl.iter().map(|p| Vector2::new(p[0], p[1])).collect())
            .collect();
        polylines_to_segments(&polylines)
    }
}

pub fn read_request(path: &Path) -> Result<Request> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

/// Wire form of a placement: center, radius, half-height, angle range.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
pub struct PlacementOut {
    pub c: [f64; 2],
    pub r: f64,
    pub h: f64,
    pub a: f64,
    pub b: f64,
}

impl From<&Placement> for PlacementOut {
    fn from(p: &Placement) -> Self {
        let c = p.circle.center();
        Self {
            c: [c.x, c.y],
            r: p.circle.radius(),
            h: p.height,
            a: p.angle_low,
            b: p.angle_high,
        }
    }
}

/// Write `placement` as pretty JSON (`null` for no placement), creating parent dirs.
pub fn write_placement(out: &Path, placement: Option<&PlacementOut>) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(&placement)?)
        .with_context(|| format!("writing {}", out.display()))
}
