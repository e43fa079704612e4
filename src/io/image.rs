//! Mask loading, normalization, and plate export
//!
//! Masks are binary black/white PNG images. Loading resizes to the
//! configured square with nearest-neighbor filtering (anything smoother
//! would introduce foreign colors along the boundary) and binarizes by
//! luma threshold, so slightly off-white scans still normalize to the
//! pure sentinels the classifier expects.

use crate::io::error::{PlateError, Result};
use crate::spatial::Canvas;
use crate::spatial::mask::{BLACK, WHITE};
use image::imageops::FilterType;
use image::{ImageBuffer, Rgba};
use std::path::Path;

// Luma values below this normalize to the black sentinel
const LUMA_THRESHOLD: u8 = 128;

/// Load a black/white PNG mask into a square canvas of `size` pixels
///
/// # Errors
///
/// Returns an error if:
/// - The path does not carry a `.png` extension
/// - The image cannot be loaded
/// - The image has zero pixels
pub fn load_mask_canvas(path: &Path, size: usize) -> Result<Canvas> {
    if path.extension().and_then(|s| s.to_str()) != Some("png") {
        return Err(PlateError::UnsupportedFormat {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path).map_err(|e| PlateError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    if img.width() == 0 || img.height() == 0 {
        return Err(PlateError::InvalidMask {
            reason: "mask image has zero pixels".to_string(),
        });
    }

    let luma = img
        .resize_exact(size as u32, size as u32, FilterType::Nearest)
        .to_luma8();

    let mut canvas = Canvas::new(size, size, WHITE);
    for (x, y, pixel) in luma.enumerate_pixels() {
        if pixel.0[0] < LUMA_THRESHOLD {
            canvas.put(x as i32, y as i32, BLACK);
        }
    }
    Ok(canvas)
}

/// Export a canvas as a PNG image
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the
/// image cannot be saved.
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<()> {
    let width = canvas.width() as u32;
    let height = canvas.height() as u32;

    let mut img = ImageBuffer::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let color = canvas.get(x as i32, y as i32).unwrap_or(WHITE);
        *pixel = Rgba(color);
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PlateError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path).map_err(|e| PlateError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
