//! Stochastic crevice filling after graph-based packing saturates
//!
//! The crevice filler treats the canvas as ground truth: it neither reads
//! nor writes the graph structures. Candidates are random center/radius
//! pairs; a candidate is accepted only when every pixel inside the disk
//! still carries a pure mask sentinel color, so anything already drawn
//! (and the wall) rejects it.

use crate::algorithm::solver::{PlacedCircle, pick_color};
use crate::io::configuration::PlateConfig;
use crate::math::{distance, to_position};
use crate::spatial::mask::contains_foreign;
use crate::spatial::{Canvas, PixelClass};
use rand::Rng;
use rand::rngs::StdRng;

/// Result of the crevice-filling pass
#[derive(Debug)]
pub struct CreviceOutcome {
    /// Circles committed by the filler, in acceptance order
    pub placed: Vec<PlacedCircle>,
    /// Total candidates sampled across both phases
    pub attempts: usize,
    /// Whether the cumulative filled area reached the coverage target
    pub reached_target: bool,
}

/// Top up coverage with random circles until the target ratio is reached
///
/// `filled_area` carries the area already committed by the graph passes;
/// the coverage target is `wall_area * target_fill_ratio` over the
/// combined total. Phase one spends a fixed warmup budget (cheap,
/// guaranteed-bounded yield); phase two loops until the target is met or
/// the configured attempt ceiling trips. The ceiling budgets phase two
/// only; warmup attempts do not consume it, though the reported attempt
/// total covers both phases. Acceptance probability shrinks as the plate
/// saturates, which is why the second phase carries a ceiling at all;
/// running into it is reported, not raised.
pub fn fill_crevices(
    canvas: &mut Canvas,
    config: &PlateConfig,
    rng: &mut StdRng,
    mut filled_area: f64,
) -> CreviceOutcome {
    let target_area = config.wall_area() * config.target_fill_ratio;
    let mut placed = Vec::new();
    let mut attempts = 0;

    for _ in 0..config.crevice_warmup_iterations {
        attempts += 1;
        if let Some(circle) = try_place(canvas, config, rng) {
            filled_area += circle.area();
            placed.push(circle);
        }
    }

    let mut bounded_attempts = 0;
    while filled_area < target_area && bounded_attempts < config.crevice_iteration_ceiling {
        attempts += 1;
        bounded_attempts += 1;
        if let Some(circle) = try_place(canvas, config, rng) {
            filled_area += circle.area();
            placed.push(circle);
        }
    }

    CreviceOutcome {
        placed,
        attempts,
        reached_target: filled_area >= target_area,
    }
}

// One candidate: uniform center over the canvas, uniform radius over the
// crevice range, classified from the sentinel color under the center.
fn try_place(canvas: &mut Canvas, config: &PlateConfig, rng: &mut StdRng) -> Option<PlacedCircle> {
    let x = rng.random_range(0..config.width as i32);
    let y = rng.random_range(0..config.height as i32);
    let radius = rng.random_range(config.crevice_min_radius..=config.crevice_max_radius);

    let class = canvas.get(x, y).and_then(PixelClass::classify)?;

    if distance(to_position([x, y]), config.plate_center()) + radius > config.wall_radius {
        return None;
    }
    if contains_foreign(canvas, [x, y], radius) {
        return None;
    }

    let palette = match class {
        PixelClass::Figure => &config.figure_palette,
        PixelClass::Ground => &config.ground_palette,
    };
    canvas.draw_disk([x, y], radius, pick_color(palette, rng));

    Some(PlacedCircle {
        x,
        y,
        radius,
        class,
    })
}
