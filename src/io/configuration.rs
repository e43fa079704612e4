//! Plate constants and runtime configuration
//!
//! The packing core consumes a validated, immutable [`PlateConfig`] threaded
//! through every phase. Validation happens once at program entry; the core
//! treats a valid config as a precondition and never re-checks it.

use crate::io::error::{Result, invalid_parameter};
use std::f64::consts::PI;

/// Default square plate dimension in pixels
pub const DEFAULT_PLATE_SIZE: usize = 800;

/// Default wall radius as a fraction of the plate width
pub const DEFAULT_WALL_RADIUS_RATIO: f64 = 0.45;

/// Default minimum committed circle radius
pub const DEFAULT_MIN_CIRCLE_RADIUS: f64 = 5.0;

/// Default maximum committed circle radius
pub const DEFAULT_MAX_CIRCLE_RADIUS: f64 = 40.0;

/// Default seed-grid cell size for grid-jittered placement
pub const DEFAULT_BOX_SIZE: usize = 20;

/// Default fraction of the wall area the crevice filler aims to cover
pub const DEFAULT_TARGET_FILL_RATIO: f64 = 0.6;

/// Default smallest crevice circle radius
pub const DEFAULT_CREVICE_MIN_RADIUS: f64 = 3.0;

/// Default largest crevice circle radius
pub const DEFAULT_CREVICE_MAX_RADIUS: f64 = 20.0;

/// Fixed iteration count of the first (cheap) crevice-fill phase
pub const CREVICE_WARMUP_ITERATIONS: usize = 10_000;

/// Default attempt ceiling for the coverage-bounded crevice-fill phase
///
/// Acceptance probability shrinks as the plate saturates, so the
/// coverage-bounded loop gets a hard cap; hitting it is reported in the
/// run statistics rather than treated as an error.
pub const DEFAULT_CREVICE_ITERATION_CEILING: usize = 2_000_000;

/// Candidate budget for the uniform rejection-sampling strategy
pub const REJECTION_SAMPLING_ATTEMPTS: usize = 5_000;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Color schemes adapted from Ian Faust's Ishihara plate work
/// Default hex palette for figure circles
pub const FIGURE_COLOR_SCHEME: [&str; 2] = ["#c1152d", "#e2644e"];
/// Default hex palette for ground circles
pub const GROUND_COLOR_SCHEME: [&str; 2] = ["#008d37", "#7cbc4a"];

/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_plate";

/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

/// Seed placement strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementStrategy {
    /// One jittered candidate per grid cell; spacing is left to relaxation
    GridJitter,
    /// Uniform candidates with explicit spacing checks and a fixed budget
    RejectionSampling,
}

/// Validated, immutable parameters for one plate generation run
#[derive(Debug, Clone)]
pub struct PlateConfig {
    /// Canvas width in pixels (must equal `height`)
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Radius of the circular wall bounding every committed circle
    pub wall_radius: f64,
    /// Smallest radius any seed is guaranteed to receive
    pub min_circle_radius: f64,
    /// Cap applied to every committed radius
    pub max_circle_radius: f64,
    /// Grid cell size for jittered seed placement
    pub box_size: usize,
    /// RGBA palette for figure circles
    pub figure_palette: Vec<[u8; 4]>,
    /// RGBA palette for ground circles
    pub ground_palette: Vec<[u8; 4]>,
    /// Fraction of the wall area to reach before crevice filling stops
    pub target_fill_ratio: f64,
    /// Smallest crevice circle radius
    pub crevice_min_radius: f64,
    /// Largest crevice circle radius
    pub crevice_max_radius: f64,
    /// Iteration count of the fixed-budget crevice phase
    pub crevice_warmup_iterations: usize,
    /// Attempt ceiling of the coverage-bounded crevice phase
    pub crevice_iteration_ceiling: usize,
    /// Seed placement strategy
    pub placement: PlacementStrategy,
}

impl PlateConfig {
    /// Build a config with defaults scaled to a square plate of `size` pixels
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in color schemes fail to parse.
    pub fn with_size(size: usize) -> Result<Self> {
        Ok(Self {
            width: size,
            height: size,
            wall_radius: size as f64 * DEFAULT_WALL_RADIUS_RATIO,
            min_circle_radius: DEFAULT_MIN_CIRCLE_RADIUS,
            max_circle_radius: DEFAULT_MAX_CIRCLE_RADIUS,
            box_size: DEFAULT_BOX_SIZE,
            figure_palette: parse_palette("figure_palette", &FIGURE_COLOR_SCHEME)?,
            ground_palette: parse_palette("ground_palette", &GROUND_COLOR_SCHEME)?,
            target_fill_ratio: DEFAULT_TARGET_FILL_RATIO,
            crevice_min_radius: DEFAULT_CREVICE_MIN_RADIUS,
            crevice_max_radius: DEFAULT_CREVICE_MAX_RADIUS,
            crevice_warmup_iterations: CREVICE_WARMUP_ITERATIONS,
            crevice_iteration_ceiling: DEFAULT_CREVICE_ITERATION_CEILING,
            placement: PlacementStrategy::GridJitter,
        })
    }

    /// Check every invariant the packing core relies on
    ///
    /// # Errors
    ///
    /// Returns an [`crate::PlateError::InvalidParameter`] describing the
    /// first violated invariant:
    /// - `width == height`, both positive
    /// - `wall_radius < width / 2`
    /// - `min_circle_radius < max_circle_radius < wall_radius / 2`
    /// - `2 * min_circle_radius < box_size < wall_radius / 2`
    /// - `target_fill_ratio` in `(0, 1)`
    /// - `crevice_min_radius <= crevice_max_radius`, both positive
    /// - non-empty palettes
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width != self.height {
            return Err(invalid_parameter(
                "width",
                &self.width,
                &format!("canvas must be square and non-empty, height is {}", self.height),
            ));
        }
        if self.wall_radius <= 0.0 || self.wall_radius >= self.width as f64 / 2.0 {
            return Err(invalid_parameter(
                "wall_radius",
                &self.wall_radius,
                &"must be positive and smaller than half the plate width",
            ));
        }
        if self.min_circle_radius <= 0.0 || self.min_circle_radius >= self.max_circle_radius {
            return Err(invalid_parameter(
                "min_circle_radius",
                &self.min_circle_radius,
                &format!(
                    "must be positive and smaller than max_circle_radius ({})",
                    self.max_circle_radius
                ),
            ));
        }
        if self.max_circle_radius >= self.wall_radius / 2.0 {
            return Err(invalid_parameter(
                "max_circle_radius",
                &self.max_circle_radius,
                &"must be smaller than half the wall radius",
            ));
        }
        let box_size = self.box_size as f64;
        if box_size <= 2.0 * self.min_circle_radius || box_size >= self.wall_radius / 2.0 {
            return Err(invalid_parameter(
                "box_size",
                &self.box_size,
                &"must exceed twice the minimum circle radius and stay below half the wall radius",
            ));
        }
        if self.target_fill_ratio <= 0.0 || self.target_fill_ratio >= 1.0 {
            return Err(invalid_parameter(
                "target_fill_ratio",
                &self.target_fill_ratio,
                &"must lie strictly between 0 and 1 so the coverage loop can terminate",
            ));
        }
        if self.crevice_min_radius <= 0.0 || self.crevice_min_radius > self.crevice_max_radius {
            return Err(invalid_parameter(
                "crevice_min_radius",
                &self.crevice_min_radius,
                &format!(
                    "must be positive and no larger than crevice_max_radius ({})",
                    self.crevice_max_radius
                ),
            ));
        }
        if self.figure_palette.is_empty() || self.ground_palette.is_empty() {
            return Err(invalid_parameter(
                "figure_palette",
                &"[]",
                &"both palettes need at least one color",
            ));
        }
        Ok(())
    }

    /// Center of the plate in pixel coordinates
    pub const fn plate_center(&self) -> [f64; 2] {
        [self.width as f64 / 2.0, self.height as f64 / 2.0]
    }

    /// Total area enclosed by the wall
    pub const fn wall_area(&self) -> f64 {
        PI * self.wall_radius * self.wall_radius
    }
}

/// Parse a `#rrggbb` hex color specification into RGBA
///
/// # Errors
///
/// Returns an error if the specification is not a `#` followed by exactly
/// six hex digits.
pub fn parse_hex_color(parameter: &'static str, spec: &str) -> Result<[u8; 4]> {
    let digits = spec
        .strip_prefix('#')
        .filter(|d| d.len() == 6)
        .ok_or_else(|| {
            invalid_parameter(parameter, &spec, &"expected '#' followed by six hex digits")
        })?;

    let channel = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .ok_or_else(|| invalid_parameter(parameter, &spec, &"invalid hex digits"))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?, 255])
}

/// Parse a list of hex color specifications into an RGBA palette
///
/// # Errors
///
/// Returns an error if any entry fails [`parse_hex_color`].
pub fn parse_palette(parameter: &'static str, specs: &[&str]) -> Result<Vec<[u8; 4]>> {
    specs
        .iter()
        .map(|spec| parse_hex_color(parameter, spec))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PlateConfig::with_size(DEFAULT_PLATE_SIZE).and_then(|c| {
            c.validate()?;
            Ok(c)
        });
        assert!(config.is_ok());
    }

    #[test]
    fn test_radius_ordering_is_enforced() {
        let Ok(mut config) = PlateConfig::with_size(DEFAULT_PLATE_SIZE) else {
            unreachable!("default palettes must parse");
        };
        config.min_circle_radius = config.max_circle_radius;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_box_size_window_is_enforced() {
        let Ok(mut config) = PlateConfig::with_size(DEFAULT_PLATE_SIZE) else {
            unreachable!("default palettes must parse");
        };
        config.box_size = (2.0 * config.min_circle_radius) as usize;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_fill_ratio_must_leave_headroom() {
        let Ok(mut config) = PlateConfig::with_size(DEFAULT_PLATE_SIZE) else {
            unreachable!("default palettes must parse");
        };
        config.target_fill_ratio = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hex_color_parsing() {
        assert_eq!(
            parse_hex_color("figure_palette", "#c1152d").ok(),
            Some([0xc1, 0x15, 0x2d, 255])
        );
        assert!(parse_hex_color("figure_palette", "c1152d").is_err());
        assert!(parse_hex_color("figure_palette", "#c1152").is_err());
        assert!(parse_hex_color("figure_palette", "#c1152g").is_err());
    }
}
