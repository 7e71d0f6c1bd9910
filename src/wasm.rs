use crate::kdtree::{KdTree, Point};
use rand::prelude::*;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;

/// WASM wrapper around [`KdTree`] working on flat `f64` buffers, since
/// nested arrays do not cross the JS boundary cheaply. A buffer of
/// `count * dims` values is interpreted as `count` points of `dims`
/// coordinates each.
#[wasm_bindgen(js_name = KdTree)]
pub struct KdTreeWasm {
    inner: KdTree,
    dims: usize,
}

#[wasm_bindgen(js_class = KdTree)]
impl KdTreeWasm {
    /// Builds the tree from a flat coordinate buffer. A `dims` of zero or an
    /// empty buffer yields an empty tree.
    #[wasm_bindgen(constructor)]
    pub fn new(points: &[f64], dims: usize) -> KdTreeWasm {
        let points: Vec<Point> = if dims == 0 {
            Vec::new()
        } else {
            points.chunks_exact(dims).map(|p| p.to_vec()).collect()
        };
        KdTreeWasm {
            inner: KdTree::build(&points),
            dims,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn count_points(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(getter)]
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Returns the `n` nearest points to `query` as a flat buffer of
    /// `dims`-sized stretches, closest-first.
    pub fn nearest(&self, query: &[f64], n: usize) -> Vec<f64> {
        let mut found = self.inner.nearest(query, n);
        found.sort_by(|a, b| {
            let da = crate::metric::distance_sq(a, query);
            let db = crate::metric::distance_sq(b, query);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });
        found.into_iter().flatten().collect()
    }

    /// Generates a flat buffer of `count` random points with coordinates in
    /// `[min, max)`, ready to feed to the constructor.
    pub fn random_points(count: usize, dims: usize, min: f64, max: f64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(get_seed());
        let mut points = Vec::with_capacity(count * dims);
        for _ in 0..count * dims {
            points.push(min + rng.r#gen::<f64>() * (max - min));
        }
        points
    }
}

fn get_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * 4294967296.0) as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        123456789 // Fixed seed for tests
    }
}
