use anyhow::Result;
use arclabel::api::{
    draw_corridor, place_label, CorridorCfg, CorridorReplay, LabelCfg, PathMode, SkeletonGraph,
};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{read_edges_csv, read_request, write_placement, PlacementOut};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "arclabel")]
#[command(about = "Curved label placement along a shape skeleton")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

/// Placement tuning shared by `place` and `demo`.
#[derive(Args, Clone, Debug)]
struct Tuning {
    /// Label height-to-width ratio; derived from the text when absent
    #[arg(long)]
    aspect: Option<f64>,
    /// Maximum number of candidate paths
    #[arg(long, default_value_t = 10)]
    paths: usize,
    /// Collect candidates across clearance scales
    #[arg(long)]
    multi_scale: bool,
    /// Points per resampled path
    #[arg(long, default_value_t = arclabel::api::DEFAULT_SAMPLES)]
    samples: usize,
    /// Keep candidates whose label center falls outside the boundary
    #[arg(long)]
    no_inside_check: bool,
}

impl Tuning {
    fn label_cfg(&self, text: &str) -> LabelCfg {
        let mut cfg = LabelCfg::for_text(text);
        if let Some(aspect) = self.aspect {
            cfg.aspect = aspect;
        }
        cfg.paths.k = self.paths;
        cfg.paths.samples = self.samples;
        cfg.paths.mode = if self.multi_scale {
            PathMode::MultiScale
        } else {
            PathMode::SingleScale
        };
        cfg.require_inside = !self.no_inside_check;
        cfg
    }
}

#[derive(Subcommand)]
enum Action {
    /// Place one label from a skeleton edge table and a boundary request
    Place {
        /// CSV with columns px,py,qx,qy,weight,clearance
        #[arg(long)]
        graph: PathBuf,
        /// JSON request {"poly": [[[x, y], ...], ...], "text": "..."}
        #[arg(long)]
        boundary: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        tuning: Tuning,
    },
    /// Place a label on a synthetic corridor
    Demo {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value = "label")]
        text: String,
        #[arg(long)]
        out: PathBuf,
        #[command(flatten)]
        tuning: Tuning,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Place {
            graph,
            boundary,
            out,
            tuning,
        } => place(&graph, &boundary, &out, &tuning, cmd.tag).map(|_| ()),
        Action::Demo {
            seed,
            index,
            text,
            out,
            tuning,
        } => demo(seed, index, &text, &out, &tuning, cmd.tag).map(|_| ()),
        Action::Report => report(cmd.tag),
    }
}

fn params(cfg: &LabelCfg, text: &str) -> serde_json::Value {
    serde_json::json!({
        "text": text,
        "aspect": cfg.aspect,
        "paths": cfg.paths.k,
        "mode": format!("{:?}", cfg.paths.mode),
        "samples": cfg.paths.samples,
        "require_inside": cfg.require_inside,
    })
}

fn place(
    graph: &Path,
    boundary: &Path,
    out: &Path,
    tuning: &Tuning,
    tag: Option<String>,
) -> Result<Option<PlacementOut>> {
    tracing::info!(
        graph = %graph.display(),
        boundary = %boundary.display(),
        out = %out.display(),
        tag = ?tag,
        "place"
    );
    let edges = read_edges_csv(graph)?;
    let request = read_request(boundary)?;
    let segments = request.segments();
    let skeleton = SkeletonGraph::from_edges(&edges);
    tracing::info!(
        edges = skeleton.edge_count(),
        nodes = skeleton.node_count(),
        segments = segments.len(),
        "inputs"
    );

    let cfg = tuning.label_cfg(&request.text);
    let placement = place_label(&skeleton, &segments, &cfg).map(|p| PlacementOut::from(&p));
    report_outcome(placement.as_ref());
    write_placement(out, placement.as_ref())?;
    write_sidecar(
        out,
        Payload::new(params(&cfg, &request.text))
            .with_inputs([
                graph.to_string_lossy().into_owned(),
                boundary.to_string_lossy().into_owned(),
            ])
            .with_tag(tag),
    )?;
    Ok(placement)
}

fn demo(
    seed: u64,
    index: u64,
    text: &str,
    out: &Path,
    tuning: &Tuning,
    tag: Option<String>,
) -> Result<Option<PlacementOut>> {
    tracing::info!(seed, index, text, out = %out.display(), tag = ?tag, "demo");
    let band = draw_corridor(CorridorCfg::default(), CorridorReplay { seed, index });
    tracing::info!(
        radius = band.radius,
        half_width = band.half_width,
        start = band.start,
        span = band.span,
        "corridor"
    );
    let cfg = tuning.label_cfg(text);
    let placement =
        place_label(&band.skeleton, &band.boundary, &cfg).map(|p| PlacementOut::from(&p));
    report_outcome(placement.as_ref());
    write_placement(out, placement.as_ref())?;
    let mut params = params(&cfg, text);
    params["seed"] = seed.into();
    params["index"] = index.into();
    write_sidecar(out, Payload::new(params).with_tag(tag))?;
    Ok(placement)
}

fn report_outcome(placement: Option<&PlacementOut>) {
    match placement {
        Some(p) => tracing::info!(
            cx = p.c[0],
            cy = p.c[1],
            r = p.r,
            h = p.h,
            a = p.a,
            b = p.b,
            "placement"
        ),
        None => tracing::info!("no placement"),
    }
}

fn report(tag: Option<String>) -> Result<()> {
    let mut obj = provenance::header();
    obj["tag"] = serde_json::json!(tag);
    obj["params"] = serde_json::json!({});
    obj["outputs"] = serde_json::json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
