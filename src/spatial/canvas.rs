//! Mutable RGBA raster surface
//!
//! The canvas is the single shared resource of the pipeline: seed placement
//! and graph construction read it, the relaxation solver and crevice filler
//! write to it through [`Canvas::draw_disk`]. Phases run strictly in order,
//! so later acceptance tests always observe earlier writes.

use crate::math::for_each_disk_pixel;
use ndarray::Array2;

/// Row-major RGBA pixel raster
///
/// Storage is `(height, width)` indexed as `[y, x]`, matching the raster
/// index projection `width * y + x` used by seeds.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: Array2<[u8; 4]>,
}

impl Canvas {
    /// Create a canvas filled with a single color
    pub fn new(width: usize, height: usize, fill: [u8; 4]) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), fill),
        }
    }

    /// Width of the raster in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Height of the raster in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }

    /// Color of the pixel at the given coordinates, if in bounds
    pub fn get(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        if x < 0 || y < 0 {
            return None;
        }
        self.pixels.get([y as usize, x as usize]).copied()
    }

    /// Overwrite the pixel at the given coordinates
    ///
    /// Out-of-bounds writes are ignored; disk rendering near the canvas
    /// edge clips instead of failing.
    pub fn put(&mut self, x: i32, y: i32, color: [u8; 4]) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(pixel) = self.pixels.get_mut([y as usize, x as usize]) {
            *pixel = color;
        }
    }

    /// Render a filled disk
    ///
    /// This is the only mutation primitive the packing phases use. Every
    /// raster pixel whose center lies within `radius` of `center` is
    /// overwritten with `color`.
    pub fn draw_disk(&mut self, center: [i32; 2], radius: f64, color: [u8; 4]) {
        let (width, height) = (self.width(), self.height());
        for_each_disk_pixel(center, radius, width, height, |x, y| {
            self.put(x, y, color);
        });
    }
}
