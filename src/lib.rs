//! # kdnear
//!
//! `kdnear` is a Rust library for exact nearest-neighbor search over a fixed
//! set of k-dimensional points, designed to be used in Rust as well as
//! compiled to WebAssembly (WASM). It builds a balanced k-d tree once and
//! answers top-N queries against it with hyperplane pruning.
//!
//! ## Features
//!
//! - **WASM-first**: Built with `wasm-bindgen` for seamless integration with JavaScript and TypeScript.
//! - **Balanced construction**: Median splits with a depth-cycled axis keep the tree height logarithmic.
//! - **Exact queries**: The returned neighbors are the true top-N by squared Euclidean distance, never an approximation.
//! - **Static by design**: The tree is immutable after construction, so concurrent reads need no synchronization.
//!
//! ## Example
//!
//! See the `demos/` directory for an SVG render and a profiling run.
//!
//! ## Main Interface
//!
//! The primary entry point is the [`KdTree`] struct, built once from a point
//! set and queried with [`KdTree::nearest`].

mod kdtree;
mod metric;
mod search;
mod wasm;

pub use kdtree::KdNode;
pub use kdtree::KdTree;
pub use kdtree::Point;
pub use kdtree::sort_by_axis;
pub use metric::distance_sq;
pub use wasm::KdTreeWasm;
