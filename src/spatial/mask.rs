//! Figure/ground pixel classification and boundary scans
//!
//! The mask is binary: pure black pixels belong to the figure, pure white
//! pixels to the ground. Any other color is foreign: it can only come from
//! a circle that has already been rendered, which is exactly what the
//! crevice filler and the relaxation rescan need to reject against.

use crate::math::{disk_bounds, distance_squared, to_position};
use crate::spatial::Canvas;

/// Sentinel color of figure pixels
pub const BLACK: [u8; 4] = [0, 0, 0, 255];
/// Sentinel color of ground pixels
pub const WHITE: [u8; 4] = [255, 255, 255, 255];

/// Mask-derived class of a plate region
///
/// A seed's class is fixed at creation from the mask pixel under it and
/// never changes; figure and ground circles are packed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelClass {
    /// The foreground shape of the plate (black mask pixels)
    Figure,
    /// The background of the plate (white mask pixels)
    Ground,
}

impl PixelClass {
    /// Classify a raster color against the mask sentinels
    ///
    /// Returns `None` for foreign colors (anything already drawn).
    pub const fn classify(color: [u8; 4]) -> Option<Self> {
        match color {
            BLACK => Some(Self::Figure),
            WHITE => Some(Self::Ground),
            _ => None,
        }
    }

    /// The class on the other side of the figure/ground boundary
    pub const fn opposite(self) -> Self {
        match self {
            Self::Figure => Self::Ground,
            Self::Ground => Self::Figure,
        }
    }

    /// Sentinel mask color of this class
    pub const fn sentinel(self) -> [u8; 4] {
        match self {
            Self::Figure => BLACK,
            Self::Ground => WHITE,
        }
    }
}

/// Distance to the nearest pixel of the opposite class within `limit`
///
/// Exact bounded scan: the clipped bounding box of the limit disk is
/// enumerated in full and the minimum distance to an opposite-class pixel
/// is returned. Returns `None` when no opposite pixel lies within `limit`.
pub fn nearest_opposite_distance(
    canvas: &Canvas,
    center: [i32; 2],
    class: PixelClass,
    limit: f64,
) -> Option<f64> {
    let opposite = class.opposite().sentinel();
    nearest_distance_where(canvas, center, limit, |color| color == opposite)
}

/// Distance to the nearest pixel not carrying this class's sentinel within `limit`
///
/// Unlike [`nearest_opposite_distance`] this also reacts to foreign
/// (already drawn) colors, so the mask boundary and every rendered circle
/// cap the result alike. The relaxation solver commits radii against this
/// scan; the opposite-only variant would let it overlap circles rendered
/// for earlier nodes of the same class.
pub fn nearest_obstruction_distance(
    canvas: &Canvas,
    center: [i32; 2],
    class: PixelClass,
    limit: f64,
) -> Option<f64> {
    let own = class.sentinel();
    nearest_distance_where(canvas, center, limit, |color| color != own)
}

// Shared bounded scan tracking the minimum distance to a blocking pixel
fn nearest_distance_where(
    canvas: &Canvas,
    center: [i32; 2],
    limit: f64,
    mut blocks: impl FnMut([u8; 4]) -> bool,
) -> Option<f64> {
    let limit_squared = limit * limit;
    let c = to_position(center);
    let (x_range, y_range) = disk_bounds(center, limit, canvas.width(), canvas.height());

    let mut nearest_squared = f64::INFINITY;
    for y in y_range {
        for x in x_range.clone() {
            let d_squared = distance_squared(c, to_position([x, y]));
            if d_squared > limit_squared || d_squared >= nearest_squared {
                continue;
            }
            if canvas.get(x, y).is_some_and(&mut blocks) {
                nearest_squared = d_squared;
            }
        }
    }

    nearest_squared.is_finite().then(|| nearest_squared.sqrt())
}

/// Whether any pixel within the disk carries a foreign (non-sentinel) color
///
/// Foreign colors are already-drawn circles; the crevice filler accepts a
/// candidate disk only when this scan comes back clean.
pub fn contains_foreign(canvas: &Canvas, center: [i32; 2], radius: f64) -> bool {
    let r_squared = radius * radius;
    let c = to_position(center);
    let (x_range, y_range) = disk_bounds(center, radius, canvas.width(), canvas.height());

    for y in y_range {
        for x in x_range.clone() {
            if distance_squared(c, to_position([x, y])) > r_squared {
                continue;
            }
            if canvas.get(x, y).and_then(PixelClass::classify).is_none() {
                return true;
            }
        }
    }
    false
}
