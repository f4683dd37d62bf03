//! Placement timing probe over a batch of random corridors.
//!
//! Purpose
//! - Give a reproducible data point for "how long does one placement take on
//!   a 40-edge corridor?" and how close the fitted baseline lands to the
//!   corridor's true arc.
//!
//! Run: `cargo run --release -p arclabel --example corridor_timing`

use std::time::Instant;

use arclabel::prelude::*;

fn main() {
    let cfg = CorridorCfg::default();
    let label = LabelCfg::for_text("Mississippi");
    let draws = 200u64;

    let mut placed = 0usize;
    let mut worst_radius_err = 0.0f64;
    let start = Instant::now();
    for index in 0..draws {
        let band = draw_corridor(cfg, ReplayToken { seed: 2024, index });
        if let Some(p) = place_label(&band.skeleton, &band.boundary, &label) {
            placed += 1;
            let err = (p.circle.radius() - band.radius).abs() / band.radius;
            worst_radius_err = worst_radius_err.max(err);
        }
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;

    println!(
        "family=annular_corridor draws={draws} placed={placed} aspect={:.4}",
        label.aspect
    );
    println!("worst_relative_radius_error={worst_radius_err:.6}");
    println!("mean_time_ms={:.3}", elapsed_ms / draws as f64);
}
