//! Greedy radius relaxation over a built packing graph
//!
//! Nodes are committed strictly in list order: earlier nodes always claim
//! their full available radius, later nodes inherit whatever slack
//! remains. There is no backtracking; the result is order-dependent and
//! that is the defined contract of the pass, not a defect.

use crate::algorithm::graph::PackingGraph;
use crate::io::configuration::PlateConfig;
use crate::math::distance;
use crate::spatial::mask::nearest_obstruction_distance;
use crate::spatial::{Canvas, PixelClass};
use rand::Rng;
use rand::rngs::StdRng;
use std::f64::consts::PI;

/// Record of one committed circle
#[derive(Debug, Clone, Copy)]
pub struct PlacedCircle {
    /// Center x coordinate in pixels
    pub x: i32,
    /// Center y coordinate in pixels
    pub y: i32,
    /// Committed radius
    pub radius: f64,
    /// Mask class the circle was packed for
    pub class: PixelClass,
}

impl PlacedCircle {
    /// Center of the circle in pixel coordinates
    pub const fn center(&self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// Area of the circle
    pub const fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

/// Pick a random color from a palette
pub fn pick_color(palette: &[[u8; 4]], rng: &mut StdRng) -> [u8; 4] {
    palette
        .get(rng.random_range(0..palette.len().max(1)))
        .copied()
        .unwrap_or([0, 0, 0, 255])
}

/// Commit a final radius per node, in list order, rendering eagerly
///
/// Each node's committed radius is the tightest of its relaxed upper
/// bound, the configured maximum circle radius, and a fresh obstruction
/// scan against the current canvas: the nearest pixel not carrying the
/// class's own sentinel, so the mask boundary and every circle rendered
/// for earlier nodes cap the commit alike. Committing propagates
/// the remaining slack to every still-linked neighbor, lowering the
/// neighbor's bound and deleting the resolved edge from the neighbor's
/// side so the constraint is never reapplied. The disk is drawn before
/// the next node is processed; later acceptance scans must observe it.
pub fn solve_and_render(
    graph: &mut PackingGraph,
    canvas: &mut Canvas,
    config: &PlateConfig,
    palette: &[[u8; 4]],
    rng: &mut StdRng,
) -> Vec<PlacedCircle> {
    let class = graph.class();
    let mut placed = Vec::with_capacity(graph.len());

    for i in 0..graph.nodes.len() {
        let Some((position, coord, bound)) = graph
            .nodes
            .get(i)
            .map(|node| (node.center.position(), node.center.coord(), node.max_radius))
        else {
            continue;
        };

        let mut radius = bound.min(config.max_circle_radius);
        if let Some(obstruction) = nearest_obstruction_distance(canvas, coord, class, radius) {
            radius = radius.min(obstruction);
        }

        let neighbors = graph.nodes.get_mut(i).map_or_else(Vec::new, |node| {
            node.radius = radius;
            node.neighbors.clone()
        });

        for j in neighbors {
            let Some(neighbor) = graph.nodes.get_mut(j) else {
                continue;
            };
            let slack = distance(position, neighbor.center.position()) - radius;
            if slack < neighbor.max_radius {
                neighbor.max_radius = slack;
                neighbor.neighbors.retain(|&k| k != i);
            }
        }

        canvas.draw_disk(coord, radius, pick_color(palette, rng));
        placed.push(PlacedCircle {
            x: coord[0],
            y: coord[1],
            radius,
            class,
        });
    }

    placed
}
