//! Criterion benchmarks for corner smoothing.
//! Focus sizes: vertices in {8, 32, 128}, facets in {4, 16}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use profilegen::polygon::{smooth, FilletPolicy, Polygon, Vertex};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Star-shaped polygon with jittered radii, every vertex filleted.
fn random_polygon(n: usize, facets: usize, seed: u64) -> Polygon {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = std::f64::consts::TAU / n as f64;
    let verts = (0..n)
        .map(|k| {
            let a = k as f64 * step;
            let r = rng.gen_range(80.0..120.0);
            let p = Vector2::new(r * a.cos(), r * a.sin());
            Vertex::filleted(p, rng.gen_range(0.5..2.0), facets).unwrap()
        })
        .collect();
    Polygon::new(verts, true).unwrap()
}

fn bench_smooth(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth");
    for &n in &[8usize, 32, 128] {
        for &facets in &[4usize, 16] {
            group.bench_with_input(
                BenchmarkId::new(format!("facets_{facets}"), n),
                &n,
                |b, &n| {
                    b.iter_batched(
                        || random_polygon(n, facets, 42),
                        |p| smooth(&p, FilletPolicy::KeepCorner).unwrap(),
                        BatchSize::SmallInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_smooth);
criterion_main!(benches);
