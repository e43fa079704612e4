//! Core packing algorithm
//!
//! Phase order is load-bearing: seeds are placed first, one adjacency
//! graph per class is built and relaxed (rendering eagerly), and the
//! crevice filler runs last against the rendered canvas.

/// Stochastic crevice filling once graph-based packing saturates
pub mod crevice;
/// Plate generation orchestration across the packing phases
pub mod executor;
/// Circles-adjacency graph construction
pub mod graph;
/// Seed placement strategies
pub mod placement;
/// Seed points and their overlap predicates
pub mod seed;
/// Greedy radius relaxation and eager rendering
pub mod solver;

pub use executor::{PlateGenerator, PlateStats};
