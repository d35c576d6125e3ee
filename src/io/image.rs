//! Raster PNG preview of a simulated grid

use crate::automaton::Grid;
use crate::io::error::{PosterError, Result, invalid_configuration};
use crate::render::palette::ColorPair;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// Export the grid as a PNG with `scale` × `scale` pixels per cell
///
/// Ignores page layout, rotation and the label; the preview shows the raw
/// generations top to bottom.
///
/// # Errors
///
/// Returns an error if:
/// - The grid has no rows or the scale is zero
/// - The image would exceed `u32` pixel dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png(
    grid: &Grid,
    colors: &ColorPair,
    scale: u32,
    output_path: &Path,
) -> Result<()> {
    if grid.is_empty() || grid.width() == 0 {
        return Err(invalid_configuration(
            "preview",
            &output_path.display(),
            &"grid has no cells to draw",
        ));
    }
    if scale == 0 {
        return Err(invalid_configuration("preview", &scale, &"scale must be positive"));
    }

    let pixels = |cells: usize| {
        u32::try_from(cells)
            .ok()
            .and_then(|count| count.checked_mul(scale))
            .ok_or_else(|| {
                invalid_configuration("preview", &cells, &"image would be too large")
            })
    };
    let width = pixels(grid.width())?;
    let height = pixels(grid.len())?;

    let cells = grid.to_array();
    let living = Rgba(colors.living.to_rgba());
    let dead = Rgba(colors.dead.to_rgba());

    let img = ImageBuffer::from_fn(width, height, |x, y| {
        let alive = cells
            .get([(y / scale) as usize, (x / scale) as usize])
            .copied()
            .unwrap_or(false);
        if alive { living } else { dead }
    });

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| PosterError::OutputWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PosterError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
