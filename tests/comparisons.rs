use kdnear::{KdTree, Point, distance_sq};
use rand::prelude::*;
use rand::rngs::StdRng;

fn random_cloud(rng: &mut StdRng, count: usize, dims: usize) -> Vec<Point> {
    (0..count)
        .map(|_| (0..dims).map(|_| rng.gen_range(-100.0..100.0)).collect())
        .collect()
}

/// Brute-force top-n by scanning every point, the reference the tree search
/// must agree with exactly.
fn brute_force(points: &[Point], query: &[f64], n: usize) -> Vec<Point> {
    let mut scored: Vec<Point> = points.to_vec();
    scored.sort_by(|a, b| {
        distance_sq(a, query)
            .partial_cmp(&distance_sq(b, query))
            .unwrap()
    });
    scored.truncate(n);
    scored
}

fn sorted_by_distance(mut points: Vec<Point>, query: &[f64]) -> Vec<Point> {
    points.sort_by(|a, b| {
        distance_sq(a, query)
            .partial_cmp(&distance_sq(b, query))
            .unwrap()
    });
    points
}

#[test]
fn test_exactness_against_brute_force() {
    let mut rng = StdRng::seed_from_u64(123456789);

    for dims in 1..=4 {
        let points = random_cloud(&mut rng, 300, dims);
        let tree = KdTree::build(&points);

        for &n in &[1usize, 2, 5, 17, 64] {
            for _ in 0..10 {
                let query: Vec<f64> = (0..dims).map(|_| rng.gen_range(-120.0..120.0)).collect();
                let found = sorted_by_distance(tree.nearest(&query, n), &query);
                let expected = brute_force(&points, &query, n);

                assert_eq!(
                    found.len(),
                    expected.len(),
                    "dims {} n {}: wrong result count",
                    dims,
                    n
                );
                // Random doubles make ties vanishingly unlikely, so the
                // distance-sorted sequences must match point for point.
                for (f, e) in found.iter().zip(expected.iter()) {
                    assert_eq!(f, e, "dims {} n {}: mismatch vs brute force", dims, n);
                }
            }
        }
    }
}

#[test]
fn test_exactness_on_clustered_points() {
    // Tight clusters force deep far-branch descents; pruning must stay
    // conservative enough to keep the search exact.
    let mut rng = StdRng::seed_from_u64(99);
    let mut points = Vec::new();
    for _ in 0..20 {
        let center: Vec<f64> = (0..3).map(|_| rng.gen_range(-50.0..50.0)).collect();
        for _ in 0..15 {
            points.push(
                center
                    .iter()
                    .map(|c| c + rng.gen_range(-0.5..0.5))
                    .collect::<Point>(),
            );
        }
    }

    let tree = KdTree::build(&points);
    for _ in 0..20 {
        let query: Vec<f64> = (0..3).map(|_| rng.gen_range(-60.0..60.0)).collect();
        let found = sorted_by_distance(tree.nearest(&query, 10), &query);
        let expected = brute_force(&points, &query, 10);
        assert_eq!(found, expected);
    }
}

#[test]
fn test_query_far_outside_cloud() {
    let mut rng = StdRng::seed_from_u64(5);
    let points = random_cloud(&mut rng, 200, 2);
    let tree = KdTree::build(&points);

    let query = [1e6, -1e6];
    let found = sorted_by_distance(tree.nearest(&query, 3), &query);
    assert_eq!(found, brute_force(&points, &query, 3));
}

#[test]
fn test_distance_symmetry_random() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let a: Vec<f64> = (0..4).map(|_| rng.gen_range(-10.0..10.0)).collect();
        let b: Vec<f64> = (0..4).map(|_| rng.gen_range(-10.0..10.0)).collect();
        assert_eq!(distance_sq(&a, &b), distance_sq(&b, &a));
        assert_eq!(distance_sq(&a, &a), 0.0);
    }
}
