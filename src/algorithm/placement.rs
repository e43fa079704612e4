//! Seed placement strategies
//!
//! Both strategies partition accepted seeds into disjoint figure and ground
//! lists; the lists are never merged, and list order is the priority order
//! the relaxation solver will honor later.

use crate::algorithm::seed::Seed;
use crate::io::configuration::{PlacementStrategy, PlateConfig, REJECTION_SAMPLING_ATTEMPTS};
use crate::spatial::{Canvas, PixelClass};
use rand::Rng;
use rand::rngs::StdRng;

/// Accepted seeds partitioned by mask class
#[derive(Debug, Default)]
pub struct SeedLists {
    /// Seeds on the figure (black) region, in acceptance order
    pub figure: Vec<Seed>,
    /// Seeds on the ground (white) region, in acceptance order
    pub ground: Vec<Seed>,
}

impl SeedLists {
    fn push(&mut self, seed: Seed) {
        match seed.class() {
            PixelClass::Figure => self.figure.push(seed),
            PixelClass::Ground => self.ground.push(seed),
        }
    }

    /// Total number of accepted seeds across both classes
    pub const fn len(&self) -> usize {
        self.figure.len() + self.ground.len()
    }

    /// Whether no seed was accepted at all
    pub const fn is_empty(&self) -> bool {
        self.figure.is_empty() && self.ground.is_empty()
    }
}

/// Scatter seeds over the plate using the configured strategy
pub fn place_seeds(canvas: &Canvas, config: &PlateConfig, rng: &mut StdRng) -> SeedLists {
    match config.placement {
        PlacementStrategy::GridJitter => grid_jitter(canvas, config, rng),
        PlacementStrategy::RejectionSampling => rejection_sampling(canvas, config, rng),
    }
}

/// One jittered candidate per grid cell over the wall's bounding square
///
/// Each candidate is drawn uniformly within an inset sub-rectangle
/// (`box_size - 2 * min_radius` wide, offset by `min_radius`), so a
/// candidate can never force a collision with a neighboring cell's
/// candidate on its own. Same-class point spacing is deliberately not
/// checked here; density is resolved by graph relaxation. Work is bounded
/// by the cell count instead of a retry budget.
fn grid_jitter(canvas: &Canvas, config: &PlateConfig, rng: &mut StdRng) -> SeedLists {
    let mut seeds = SeedLists::default();

    let [cx, cy] = config.plate_center();
    let box_size = config.box_size as f64;
    let inset = box_size - 2.0 * config.min_circle_radius;
    let cells = (2.0 * config.wall_radius / box_size).ceil() as usize;
    let left = cx - config.wall_radius;
    let top = cy - config.wall_radius;

    for row in 0..cells {
        for col in 0..cells {
            let origin_x = (col as f64).mul_add(box_size, left);
            let origin_y = (row as f64).mul_add(box_size, top);
            let x = rng
                .random::<f64>()
                .mul_add(inset, origin_x + config.min_circle_radius)
                .round() as i32;
            let y = rng
                .random::<f64>()
                .mul_add(inset, origin_y + config.min_circle_radius)
                .round() as i32;

            let Some(seed) = Seed::at(x, y, canvas) else {
                continue;
            };
            if seed.overlaps_wall(config)
                || seed.overlaps_boundary(canvas, config.min_circle_radius)
            {
                continue;
            }
            seeds.push(seed);
        }
    }

    seeds
}

/// Uniform candidates over the canvas with a fixed attempt budget
///
/// The historical strategy: candidates are rejected against the wall, the
/// figure/ground boundary, and every previously accepted same-class seed.
/// The budget is iteration-bounded rather than density-bounded because the
/// rejection probability grows as the plate fills with accepted seeds.
fn rejection_sampling(canvas: &Canvas, config: &PlateConfig, rng: &mut StdRng) -> SeedLists {
    let mut seeds = SeedLists::default();

    for _ in 0..REJECTION_SAMPLING_ATTEMPTS {
        let x = rng.random_range(0..config.width as i32);
        let y = rng.random_range(0..config.height as i32);

        let Some(seed) = Seed::at(x, y, canvas) else {
            continue;
        };
        if seed.overlaps_wall(config) || seed.overlaps_boundary(canvas, config.min_circle_radius) {
            continue;
        }

        let accepted = match seed.class() {
            PixelClass::Figure => &seeds.figure,
            PixelClass::Ground => &seeds.ground,
        };
        if accepted
            .iter()
            .any(|other| seed.overlaps_seed(other, config.min_circle_radius))
        {
            continue;
        }

        seeds.push(seed);
    }

    seeds
}
