//! Geometric utilities for the packing phases
//!
//! Every phase of the pipeline reasons about the same three primitives:
//! Euclidean point distance, the projection between raster indices and
//! pixel coordinates, and bounded disk scans over the raster.

use num_traits::Float;
use std::ops::Range;

/// Squared Euclidean distance between two points
///
/// Preferred over [`distance`] wherever the comparison target can be
/// squared instead, since it avoids the square root.
pub fn distance_squared<T: Float>(a: [T; 2], b: [T; 2]) -> T {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    dx.mul_add(dx, dy * dy)
}

/// Euclidean distance between two points
pub fn distance<T: Float>(a: [T; 2], b: [T; 2]) -> T {
    distance_squared(a, b).sqrt()
}

/// Convert integer pixel coordinates to a floating-point position
pub const fn to_position(p: [i32; 2]) -> [f64; 2] {
    [p[0] as f64, p[1] as f64]
}

/// Row-major raster index of a pixel coordinate
pub const fn raster_index(x: i32, y: i32, width: usize) -> usize {
    (y as usize) * width + (x as usize)
}

/// Pixel coordinate of a row-major raster index
pub const fn index_to_coord(index: usize, width: usize) -> [i32; 2] {
    [(index % width) as i32, (index / width) as i32]
}

/// Clipped x/y ranges of the bounding box of a disk
///
/// The returned ranges cover every pixel whose center can lie within
/// `radius` of `center`, intersected with a `width` x `height` raster.
/// Callers enumerate the box and keep pixels passing the
/// [`distance_squared`] test against `radius * radius`.
pub fn disk_bounds(
    center: [i32; 2],
    radius: f64,
    width: usize,
    height: usize,
) -> (Range<i32>, Range<i32>) {
    let r = radius.ceil() as i32;
    let x_start = (center[0] - r).max(0);
    let x_end = (center[0] + r + 1).min(width as i32);
    let y_start = (center[1] - r).max(0);
    let y_end = (center[1] + r + 1).min(height as i32);
    (x_start..x_end, y_start..y_end)
}

/// Visit every raster pixel whose center lies within the disk
///
/// Enumerates the clipped bounding box from [`disk_bounds`] and invokes
/// the callback for each pixel passing the circle test.
pub fn for_each_disk_pixel(
    center: [i32; 2],
    radius: f64,
    width: usize,
    height: usize,
    mut visit: impl FnMut(i32, i32),
) {
    let r_squared = radius * radius;
    let (x_range, y_range) = disk_bounds(center, radius, width, height);
    let c = to_position(center);
    for y in y_range {
        for x in x_range.clone() {
            if distance_squared(c, to_position([x, y])) <= r_squared {
                visit(x, y);
            }
        }
    }
}
