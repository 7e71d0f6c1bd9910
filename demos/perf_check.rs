use kdnear::{KdTree, Point};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::time::Instant;

fn main() {
    let mut rng = StdRng::seed_from_u64(123456789);

    // A large cloud is usually enough to get a good profile
    let points: Vec<Point> = (0..100_000)
        .map(|_| (0..3).map(|_| rng.gen_range(0.0..100.0)).collect())
        .collect();

    let start = Instant::now();
    let tree = KdTree::build(&points);
    println!("build: {} points in {:?}", tree.len(), start.elapsed());

    // Run the queries (this is the hot path)
    let start = Instant::now();
    let mut total_found = 0;
    for _ in 0..10_000 {
        let query = [
            rng.gen_range(0.0..100.0),
            rng.gen_range(0.0..100.0),
            rng.gen_range(0.0..100.0),
        ];
        total_found += tree.nearest(&query, 16).len();
    }
    println!("nearest: 10000 queries in {:?} ({} points returned)", start.elapsed(), total_found);
}
