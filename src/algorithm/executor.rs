//! Plate generation orchestration
//!
//! Phases run strictly in order against a single shared canvas: seed
//! placement, then per-class graph build plus relaxation, then crevice fill.
//! Within the rendering phases, circles are drawn eagerly so later
//! acceptance scans observe earlier writes; that read-after-write
//! dependency is why nothing here is parallel.

use crate::algorithm::crevice::{CreviceOutcome, fill_crevices};
use crate::algorithm::graph::PackingGraph;
use crate::algorithm::placement::{SeedLists, place_seeds};
use crate::algorithm::seed::Seed;
use crate::algorithm::solver::{PlacedCircle, solve_and_render};
use crate::io::configuration::PlateConfig;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::{Canvas, PixelClass};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Summary of one completed generation run
#[derive(Debug, Clone, Copy)]
pub struct PlateStats {
    /// Circles committed for the figure class by the graph pass
    pub figure_count: usize,
    /// Circles committed for the ground class by the graph pass
    pub ground_count: usize,
    /// Circles committed by the crevice filler
    pub crevice_count: usize,
    /// Candidates the crevice filler sampled
    pub crevice_attempts: usize,
    /// Total committed circle area
    pub filled_area: f64,
    /// Filled area as a fraction of the wall area
    pub coverage: f64,
    /// Whether crevice filling reached the configured coverage target
    pub reached_target: bool,
}

/// Drives the packing phases over one canvas
///
/// The configuration is validated at construction and immutable for the
/// run; the RNG is seeded explicitly, so a fixed seed and mask yield an
/// identical plate.
#[derive(Debug)]
pub struct PlateGenerator {
    config: PlateConfig,
    canvas: Canvas,
    rng: StdRng,
    placed: Vec<PlacedCircle>,
    filled_area: f64,
    crevice_count: usize,
    crevice_attempts: usize,
    reached_target: bool,
}

impl PlateGenerator {
    /// Create a generator over a mask canvas
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation or the
    /// canvas dimensions do not match it.
    pub fn new(canvas: Canvas, config: PlateConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        if canvas.width() != config.width || canvas.height() != config.height {
            return Err(invalid_parameter(
                "width",
                &canvas.width(),
                &format!(
                    "canvas is {}x{} but the config expects {}x{}",
                    canvas.width(),
                    canvas.height(),
                    config.width,
                    config.height
                ),
            ));
        }
        Ok(Self {
            config,
            canvas,
            rng: StdRng::seed_from_u64(seed),
            placed: Vec::new(),
            filled_area: 0.0,
            crevice_count: 0,
            crevice_attempts: 0,
            reached_target: false,
        })
    }

    /// Phase 1: scatter seeds, partitioned into figure and ground lists
    ///
    /// Reads the canvas but never writes it; the only placement phase
    /// that would be safe to parallelize.
    pub fn place_seeds(&mut self) -> SeedLists {
        place_seeds(&self.canvas, &self.config, &mut self.rng)
    }

    /// Phases 2 and 3 for one class: build the graph, relax, render
    ///
    /// Returns the number of circles committed for the class.
    pub fn pack_class(&mut self, class: PixelClass, seeds: &[Seed]) -> usize {
        let mut graph = PackingGraph::build(class, seeds, &self.canvas, &self.config);
        let palette = match class {
            PixelClass::Figure => &self.config.figure_palette,
            PixelClass::Ground => &self.config.ground_palette,
        };
        let circles = solve_and_render(
            &mut graph,
            &mut self.canvas,
            &self.config,
            palette,
            &mut self.rng,
        );
        let count = circles.len();
        self.filled_area += circles.iter().map(PlacedCircle::area).sum::<f64>();
        self.placed.extend(circles);
        count
    }

    /// Phase 4: stochastic top-up against the rendered canvas
    ///
    /// Must run after both classes have been packed; the filler rejects
    /// against drawn content, not against the graphs.
    pub fn fill_crevices(&mut self) -> usize {
        let CreviceOutcome {
            placed,
            attempts,
            reached_target,
        } = fill_crevices(
            &mut self.canvas,
            &self.config,
            &mut self.rng,
            self.filled_area,
        );
        self.crevice_count = placed.len();
        self.crevice_attempts = attempts;
        self.reached_target = reached_target;
        self.filled_area += placed.iter().map(PlacedCircle::area).sum::<f64>();
        self.placed.extend(placed);
        self.crevice_count
    }

    /// Run every phase in order and return the run summary
    pub fn run(&mut self) -> PlateStats {
        let seeds = self.place_seeds();
        let figure_count = self.pack_class(PixelClass::Figure, &seeds.figure);
        let ground_count = self.pack_class(PixelClass::Ground, &seeds.ground);
        self.fill_crevices();
        self.stats(figure_count, ground_count)
    }

    /// Build the run summary from the accumulated state
    pub const fn stats(&self, figure_count: usize, ground_count: usize) -> PlateStats {
        PlateStats {
            figure_count,
            ground_count,
            crevice_count: self.crevice_count,
            crevice_attempts: self.crevice_attempts,
            filled_area: self.filled_area,
            coverage: self.filled_area / self.config.wall_area(),
            reached_target: self.reached_target,
        }
    }

    /// The canvas in its current state
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Every circle committed so far, in commit order
    pub fn circles(&self) -> &[PlacedCircle] {
        &self.placed
    }

    /// The validated configuration driving this run
    pub const fn config(&self) -> &PlateConfig {
        &self.config
    }

    /// Consume the generator and keep the rendered canvas
    pub fn into_canvas(self) -> Canvas {
        self.canvas
    }
}
