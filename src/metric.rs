/// Squared Euclidean distance between two points.
///
/// The square root is never taken: every comparison in this crate orders by
/// squared distance, which preserves the ordering while skipping a
/// transcendental operation per pair.
pub fn distance_sq(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}
