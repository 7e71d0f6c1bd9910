use std::cmp::Ordering;

/// A point in k-dimensional space. Equality is component-wise; the index
/// never mutates points it was given.
pub type Point = Vec<f64>;

/// One partition of the space: the pivot splits its subtree along `axis`.
///
/// Ownership of the children is exclusive and strictly recursive, so the
/// structure is a tree by construction and cycles are impossible.
#[derive(Clone, Debug, PartialEq)]
pub struct KdNode {
    /// Split point stored at this node.
    pub pivot: Point,
    /// Coordinate index this node splits on, `depth % k`.
    pub axis: usize,
    /// Subtree with `coord[axis] <= pivot[axis]`.
    pub left: Option<Box<KdNode>>,
    /// Subtree with `coord[axis] >= pivot[axis]`.
    pub right: Option<Box<KdNode>>,
}

/// A balanced k-d tree over a fixed set of points.
///
/// The tree is immutable after [`KdTree::build`]; queries only read it, so
/// concurrent reads from independent threads need no synchronization.
pub struct KdTree {
    pub(crate) root: Option<Box<KdNode>>,
    dims: usize,
    count: usize,
}

impl KdTree {
    /// Builds a balanced tree from the given points.
    ///
    /// The dimensionality k is inferred from the first point; an empty input
    /// yields an empty tree. At depth d the split axis is `d % k`, the subset
    /// is stable-sorted on that axis and the median becomes the pivot, with
    /// the halves before and after it recursing into the children. Every
    /// input point lands in exactly one node.
    ///
    /// Usage contract: all points share the same length. Zero-length points
    /// are accepted (they all compare equal, so the tree degenerates but
    /// stays queryable); mixed lengths are unspecified behavior.
    pub fn build(points: &[Point]) -> KdTree {
        let dims = points.first().map_or(0, |p| p.len());
        KdTree {
            root: build_recursive(points, dims, 0),
            dims,
            count: points.len(),
        }
    }

    /// The root node, if the tree is non-empty.
    pub fn root(&self) -> Option<&KdNode> {
        self.root.as_deref()
    }

    /// Number of points held by the tree.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Dimensionality inferred at build time (0 for an empty tree).
    pub fn dims(&self) -> usize {
        self.dims
    }
}

fn build_recursive(points: &[Point], dims: usize, depth: usize) -> Option<Box<KdNode>> {
    if points.is_empty() {
        return None;
    }

    // Zero-length points carry no coordinates to sort on; pin the axis and
    // skip the sort, the median split below still terminates.
    let axis = if dims == 0 { 0 } else { depth % dims };
    let sorted = if dims == 0 {
        points.to_vec()
    } else {
        sort_by_axis(points, axis)
    };

    let m = sorted.len() / 2;
    Some(Box::new(KdNode {
        pivot: sorted[m].clone(),
        axis,
        left: build_recursive(&sorted[..m], dims, depth + 1),
        right: build_recursive(&sorted[m + 1..], dims, depth + 1),
    }))
}

/// Sorts points ascending on the given coordinate, returning a new vector.
///
/// The sort is stable: equal keys keep their relative input order, which
/// makes repeated builds on the same input deterministic.
pub fn sort_by_axis(points: &[Point], axis: usize) -> Vec<Point> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a[axis].partial_cmp(&b[axis]).unwrap_or(Ordering::Equal));
    sorted
}
