//! Raster surface and mask classification
//!
//! This module contains the shared mutable canvas the packing phases draw
//! into, and the black/white mask classification used to keep figure and
//! ground circles on their own side of the boundary.

/// Mutable RGBA raster surface with the draw-disk primitive
pub mod canvas;
/// Figure/ground pixel classification and boundary scans
pub mod mask;

pub use canvas::Canvas;
pub use mask::PixelClass;
