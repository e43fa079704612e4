//! Circles-adjacency graph over one class's seeds
//!
//! One node per seed. Construction computes, per node, the tightest of
//! three bounds (wall clearance, distance to every other node minus the
//! minimum radius, and distance to the nearest opposite-class boundary
//! pixel) and records which neighbors realize that bound as symmetric
//! edges. The full pairwise scan is `O(n²)` per class with exhaustive tie
//! detection; no spatial index is used, and seed counts stay small enough
//! (bounded by the minimum radius and the plate area) that this is
//! acceptable.

use crate::algorithm::seed::Seed;
use crate::io::configuration::PlateConfig;
use crate::math::distance;
use crate::spatial::mask::nearest_opposite_distance;
use crate::spatial::{Canvas, PixelClass};

/// Tolerance for tie detection between competing node-distance bounds
///
/// Multiple neighbors may cap the same node simultaneously; bounds within
/// this tolerance of the running minimum are all recorded as edges.
pub const TIE_EPSILON: f64 = 1e-9;

/// A seed plus its shrinking radius bound and neighbor links
#[derive(Debug, Clone)]
pub struct Node {
    /// The seed this node sizes a circle around
    pub center: Seed,
    /// Committed radius; zero until the solver processes the node
    pub radius: f64,
    /// Upper bound on the radius; only ever shrinks after construction
    pub max_radius: f64,
    /// Indices of competing neighbor nodes
    ///
    /// Edges are recorded symmetrically at build time and removed
    /// unilaterally (from the losing side only) during relaxation.
    pub neighbors: Vec<usize>,
}

/// Ordered node arena for one class of seeds
///
/// Insertion order is the order seeds were generated, and it is
/// significant: the relaxation solver processes nodes in exactly this
/// order, so it doubles as the priority order for claiming space.
#[derive(Debug)]
pub struct PackingGraph {
    /// Nodes addressed by index; neighbor links refer into this arena
    pub nodes: Vec<Node>,
    class: PixelClass,
}

impl PackingGraph {
    /// Build the adjacency graph for one class's seed list
    ///
    /// For every node in list order: the wall clearance seeds the initial
    /// bound (never below the configured minimum radius); the pairwise
    /// scan lowers it further, where a strict new minimum resets the
    /// candidate set and a tie appends to it; the boundary rescan wins outright when
    /// strictly smaller, clearing the candidates (a boundary constraint
    /// has no neighbor to link against). Surviving candidates become
    /// symmetric edges.
    pub fn build(
        class: PixelClass,
        seeds: &[Seed],
        canvas: &Canvas,
        config: &PlateConfig,
    ) -> Self {
        let mut nodes: Vec<Node> = seeds
            .iter()
            .map(|seed| Node {
                center: *seed,
                radius: 0.0,
                max_radius: config.min_circle_radius,
                neighbors: Vec::new(),
            })
            .collect();

        for (i, seed) in seeds.iter().enumerate() {
            let center = seed.position();
            let wall_clearance = config.wall_radius - distance(center, config.plate_center());
            let mut bound = wall_clearance.max(config.min_circle_radius);
            let mut candidates: Vec<usize> = Vec::new();

            for (j, other) in seeds.iter().enumerate() {
                if j == i {
                    continue;
                }
                let node_bound = distance(center, other.position()) - config.min_circle_radius;
                if node_bound < bound - TIE_EPSILON {
                    bound = node_bound;
                    candidates.clear();
                    candidates.push(j);
                } else if (node_bound - bound).abs() <= TIE_EPSILON {
                    candidates.push(j);
                }
            }

            if let Some(boundary) = nearest_opposite_distance(canvas, seed.coord(), class, bound) {
                if boundary < bound {
                    bound = boundary;
                    candidates.clear();
                }
            }

            if let Some(node) = nodes.get_mut(i) {
                node.max_radius = bound;
            }
            for j in candidates {
                link(&mut nodes, i, j);
            }
        }

        Self { nodes, class }
    }

    /// Mask class this graph was built for
    pub const fn class(&self) -> PixelClass {
        self.class
    }

    /// Number of nodes in the graph
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// Records the edge on both endpoints, skipping duplicates
fn link(nodes: &mut [Node], i: usize, j: usize) {
    if let Some(node) = nodes.get_mut(i) {
        if !node.neighbors.contains(&j) {
            node.neighbors.push(j);
        }
    }
    if let Some(node) = nodes.get_mut(j) {
        if !node.neighbors.contains(&i) {
            node.neighbors.push(i);
        }
    }
}
