//! Graph-based Ishihara plate generation through constrained circle packing
//!
//! The system fills a circular plate, split into a figure region and a
//! ground region by a black/white mask image, with non-overlapping circles
//! sized as large as local geometry allows. Seeds are scattered over the
//! plate, a pairwise adjacency graph records which seeds compete for space,
//! a greedy relaxation pass converts each seed's shrinking radius bound into
//! a committed circle, and a stochastic crevice-filling pass tops up
//! coverage once the graph-based packing saturates.

#![forbid(unsafe_code)]

/// Core packing algorithm: seed placement, adjacency graph, relaxation, crevice fill
pub mod algorithm;
/// Input/output operations, configuration, and error handling
pub mod io;
/// Geometric utilities shared by every packing phase
pub mod math;
/// Raster surface and mask classification
pub mod spatial;

pub use io::error::{PlateError, Result};
