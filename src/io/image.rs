//! PNG import of pixel art and PNG preview export of glyph grids

use crate::io::configuration::{BLANK_GLYPH, MARKER_ALPHA_THRESHOLD, MARKER_LUMA_THRESHOLD};
use crate::io::error::{ArtError, Result};
use crate::spatial::ArtGrid;
use image::{ImageBuffer, Rgba};
use ndarray::Array2;
use std::path::Path;

const PREVIEW_MARKER: Rgba<u8> = Rgba([0, 0, 0, 255]);
const PREVIEW_BLANK: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Load a PNG as a glyph grid
///
/// Every pixel is one cell. Opaque dark pixels become `marker`, everything
/// else becomes a blank glyph.
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or decoded
/// - The image exceeds the grid size limit
pub fn grid_from_png(path: &Path, marker: char) -> Result<ArtGrid> {
    let img = image::open(path).map_err(|e| ArtError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    let rgba_img = img.to_rgba8();
    let (width, height) = rgba_img.dimensions();

    let mut glyphs = Array2::from_elem((height as usize, width as usize), BLANK_GLYPH);
    for (x, y, pixel) in rgba_img.enumerate_pixels() {
        if is_marker_pixel(*pixel) {
            if let Some(cell) = glyphs.get_mut((y as usize, x as usize)) {
                *cell = marker;
            }
        }
    }

    ArtGrid::from_glyphs(glyphs)
}

/// Whether a pixel counts as a drawn cell
pub fn is_marker_pixel(pixel: Rgba<u8>) -> bool {
    let [r, g, b, a] = pixel.0;
    // Rec. 601 luma in integer arithmetic
    let luma = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
    a >= MARKER_ALPHA_THRESHOLD && luma < u32::from(MARKER_LUMA_THRESHOLD)
}

/// Render a glyph grid as a black-on-transparent PNG, one pixel per cell
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no cells
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview_png(grid: &ArtGrid, marker: char, output_path: &Path) -> Result<()> {
    if grid.rows() == 0 || grid.cols() == 0 {
        return Err(ArtError::InvalidSourceData {
            reason: "Cannot render a preview of an empty grid".to_string(),
        });
    }

    let img = ImageBuffer::from_fn(grid.cols() as u32, grid.rows() as u32, |x, y| {
        if grid.glyph(y as usize, x as usize) == Some(marker) {
            PREVIEW_MARKER
        } else {
            PREVIEW_BLANK
        }
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ArtError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| ArtError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
