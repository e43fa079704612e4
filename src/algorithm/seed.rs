//! Seed points: candidate circle centers placed before sizing
//!
//! A seed's position and class are fixed at construction; the class comes
//! from the mask pixel directly under it and never migrates. Everything a
//! placement strategy needs to accept or reject a candidate is expressed
//! as an overlap predicate here.

use crate::io::configuration::PlateConfig;
use crate::math::{distance, distance_squared, raster_index, to_position};
use crate::spatial::mask::nearest_opposite_distance;
use crate::spatial::{Canvas, PixelClass};

/// An immutable-position sample point on the plate
#[derive(Debug, Clone, Copy)]
pub struct Seed {
    x: i32,
    y: i32,
    raster_index: usize,
    class: PixelClass,
}

impl Seed {
    /// Create a seed at the given pixel, classified from the mask under it
    ///
    /// Returns `None` when the pixel is outside the canvas or carries a
    /// foreign (non-sentinel) color.
    pub fn at(x: i32, y: i32, canvas: &Canvas) -> Option<Self> {
        let class = canvas.get(x, y).and_then(PixelClass::classify)?;
        Some(Self {
            x,
            y,
            raster_index: raster_index(x, y, canvas.width()),
            class,
        })
    }

    /// Pixel coordinates of the seed
    pub const fn coord(&self) -> [i32; 2] {
        [self.x, self.y]
    }

    /// Floating-point position of the seed
    pub const fn position(&self) -> [f64; 2] {
        to_position([self.x, self.y])
    }

    /// Cached row-major raster index (`width * y + x`)
    pub const fn raster_index(&self) -> usize {
        self.raster_index
    }

    /// Mask class the seed belongs to
    pub const fn class(&self) -> PixelClass {
        self.class
    }

    /// Whether a minimum-radius circle here would cross the wall
    pub fn overlaps_wall(&self, config: &PlateConfig) -> bool {
        distance(self.position(), config.plate_center()) + config.min_circle_radius
            > config.wall_radius
    }

    /// Whether this seed sits within `2 * min_radius` of another seed
    ///
    /// Two minimum-radius circles must not intersect, so accepted seeds of
    /// the same class keep at least this Euclidean spacing.
    pub fn overlaps_seed(&self, other: &Self, min_radius: f64) -> bool {
        let spacing = 2.0 * min_radius;
        distance_squared(self.position(), other.position()) < spacing * spacing
    }

    /// Whether a minimum-radius circle here would cross the figure/ground boundary
    pub fn overlaps_boundary(&self, canvas: &Canvas, min_radius: f64) -> bool {
        nearest_opposite_distance(canvas, self.coord(), self.class, min_radius).is_some()
    }
}
