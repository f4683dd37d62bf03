//! Criterion benchmarks for the wedge sweep.
//! Focus sizes: boundary segments m in {8, 32, 128, 512}.
//! Results: by default under target/criterion.

use arclabel::geom::{Circle, Segment};
use arclabel::label::{compute_wedges, replicate_wrapped, solve_placement, Wedge};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_segments(m: usize, seed: u64) -> Vec<Segment> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..m)
        .map(|_| {
            // short segments scattered around the unit circle
            let theta: f64 = rng.gen::<f64>() * std::f64::consts::TAU;
            let r = rng.gen_range(0.5..1.5);
            let a = Vector2::new(theta.cos(), theta.sin()) * r;
            let dir = rng.gen::<f64>() * std::f64::consts::TAU;
            let b = a + Vector2::new(dir.cos(), dir.sin()) * rng.gen_range(0.01..0.3);
            Segment::new(a, b)
        })
        .collect()
}

fn random_wedges(m: usize, seed: u64) -> Vec<Wedge> {
    let circle = Circle::new(Vector2::zeros(), 1.0).unwrap();
    let ws = compute_wedges(&circle, &random_segments(m, seed), 0.3).unwrap();
    replicate_wrapped(&ws)
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    for &m in &[8usize, 32, 128, 512] {
        group.bench_with_input(BenchmarkId::new("compute_wedges", m), &m, |b, &m| {
            let circle = Circle::new(Vector2::zeros(), 1.0).unwrap();
            b.iter_batched(
                || random_segments(m, 43),
                |segs| {
                    let _ws = compute_wedges(&circle, &segs, 0.3).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("solve_placement", m), &m, |b, &m| {
            b.iter_batched(
                || random_wedges(m, 44),
                |ws| {
                    let _cands = solve_placement(&ws).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep);
criterion_main!(benches);
