use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kdnear::{KdTree, Point, distance_sq};
use rand::prelude::*;
use rand::rngs::StdRng;

const NUM_POINTS: usize = 1000;

fn benchmark_nearest(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(123456789);
    let points: Vec<Point> = (0..NUM_POINTS)
        .map(|_| (0..3).map(|_| rng.gen_range(0.0..100.0)).collect())
        .collect();
    let tree = KdTree::build(&points);
    let query = [50.0, 50.0, 50.0];

    let mut group = c.benchmark_group("nearest");

    group.bench_function("kdtree_n1", |b| {
        b.iter(|| tree.nearest(black_box(&query), 1))
    });

    group.bench_function("kdtree_n16", |b| {
        b.iter(|| tree.nearest(black_box(&query), 16))
    });

    // Full scan as the baseline the pruning should beat
    group.bench_function("brute_force_n1", |b| {
        b.iter(|| {
            points
                .iter()
                .min_by(|a, m| {
                    distance_sq(a, black_box(&query))
                        .partial_cmp(&distance_sq(m, black_box(&query)))
                        .unwrap()
                })
                .cloned()
        })
    });

    group.finish();
}

criterion_group!(benches, benchmark_nearest);
criterion_main!(benches);
