use crate::kdtree::{KdNode, KdTree, Point};
use crate::metric::distance_sq;

impl KdTree {
    /// Returns up to `n` points of the tree nearest to `query` by squared
    /// Euclidean distance. The search is exact: the returned set is the true
    /// top-n, verified against brute force in the test suite. Output order
    /// follows the traversal and is not otherwise specified.
    ///
    /// An empty tree yields an empty vector, as does `n == 0`. If `n` exceeds
    /// the number of distinct point values in the tree, every value is
    /// returned once; asking for too many neighbors is not an error.
    pub fn nearest(&self, query: &[f64], n: usize) -> Vec<Point> {
        let mut candidates = Candidates {
            query,
            limit: n,
            found: Vec::new(),
        };
        if n > 0 {
            descend(self.root.as_deref(), &mut candidates);
        }
        candidates.found
    }
}

/// Bounded best-so-far set, kept in insertion order.
struct Candidates<'a> {
    query: &'a [f64],
    limit: usize,
    found: Vec<Point>,
}

impl Candidates<'_> {
    /// Registers a pivot as a candidate. Component-wise-equal points are held
    /// at most once. Under capacity the point is appended; at capacity it
    /// replaces the farthest held candidate, provided the newcomer is
    /// strictly closer. Ties among equally far candidates evict the earliest
    /// held one.
    fn register(&mut self, pivot: &Point) {
        if self.found.iter().any(|p| p == pivot) {
            return;
        }
        if self.found.len() < self.limit {
            self.found.push(pivot.clone());
            return;
        }

        let mut worst = 0;
        let mut worst_dist = distance_sq(&self.found[0], self.query);
        for (i, p) in self.found.iter().enumerate().skip(1) {
            let d = distance_sq(p, self.query);
            if d > worst_dist {
                worst = i;
                worst_dist = d;
            }
        }
        if distance_sq(pivot, self.query) < worst_dist {
            self.found[worst] = pivot.clone();
        }
    }

    /// Whether the far child can still contain a better candidate than the
    /// ones held, given the squared distance from the query to the splitting
    /// plane. `>=` keeps points lying exactly on the plane reachable.
    fn must_descend(&self, plane_dist_sq: f64) -> bool {
        self.found.len() < self.limit
            || self
                .found
                .iter()
                .any(|p| distance_sq(p, self.query) >= plane_dist_sq)
    }
}

fn descend(node: Option<&KdNode>, candidates: &mut Candidates) {
    let Some(node) = node else { return };

    let (near, far) = sides(node, candidates.query);
    descend(near, candidates);
    candidates.register(&node.pivot);
    if candidates.must_descend(plane_distance_sq(node, candidates.query)) {
        descend(far, candidates);
    }
}

/// Squared distance from the query to this node's splitting hyperplane,
/// measured along the split axis alone. Zero-length points have no plane.
fn plane_distance_sq(node: &KdNode, query: &[f64]) -> f64 {
    if node.pivot.is_empty() {
        return 0.0;
    }
    let d = query[node.axis] - node.pivot[node.axis];
    d * d
}

/// Orders the children as (near, far) relative to the query. A query sitting
/// exactly on the plane descends left first, matching the inclusive boundary
/// used by the builder.
fn sides<'t>(node: &'t KdNode, query: &[f64]) -> (Option<&'t KdNode>, Option<&'t KdNode>) {
    let left = node.left.as_deref();
    let right = node.right.as_deref();
    if node.pivot.is_empty() || query[node.axis] <= node.pivot[node.axis] {
        (left, right)
    } else {
        (right, left)
    }
}
