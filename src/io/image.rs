//! Color-mapped raster rendering and PNG export

use image::{ImageBuffer, ImageFormat, Rgb, RgbImage};
use ndarray::Array2;
use std::path::Path;

use crate::analysis::histogram::histogram_normalize;
use crate::io::configuration::Coloring;
use crate::io::error::{RenderError, Result, computation_error};
use crate::io::palette::{ColorMap, Palette};
use crate::spatial::IterationGrid;

/// Palette position in `[0, 1]` for every cell of the grid
///
/// Raw coloring scales counts linearly by the grid's largest count, so
/// bounded cells and an all-bounded grid sit at `0.0`. Histogram coloring
/// uses [`histogram_normalize`].
pub fn palette_positions(grid: &IterationGrid, coloring: Coloring) -> Array2<f64> {
    match coloring {
        Coloring::Raw => {
            let max_count = grid.max_count();
            if max_count == 0 {
                return Array2::zeros(grid.dim());
            }
            let scale = f64::from(max_count);
            grid.counts().mapv(|count| f64::from(count) / scale)
        }
        Coloring::Histogram => histogram_normalize(grid),
    }
}

/// Render the grid into an RGB raster
///
/// Pixel `(px, py)` shows cell `(px, height - 1 - py)`: the real axis runs
/// left to right and the imaginary axis bottom to top.
///
/// # Errors
///
/// Returns an error if:
/// - The grid is empty
/// - The grid is too large for image dimensions
/// - The palette's color map cannot be built
pub fn render(grid: &IterationGrid, palette: Palette, coloring: Coloring) -> Result<RgbImage> {
    if grid.is_empty() {
        return Err(computation_error("render", &"grid has no cells"));
    }

    let (columns, rows) = grid.dim();
    let width = u32::try_from(columns).map_err(|e| computation_error("render", &e))?;
    let height = u32::try_from(rows).map_err(|e| computation_error("render", &e))?;

    let color_map = ColorMap::new(palette)?;
    let positions = palette_positions(grid, coloring);
    let lowest = color_map.color_at(0.0);

    let raster: RgbImage = ImageBuffer::from_fn(width, height, |px, py| {
        let i = px as usize;
        let j = (height - 1 - py) as usize;
        positions
            .get([i, j])
            .map_or(lowest, |&t| color_map.color_at(t))
    });

    Ok(raster)
}

/// Save a rendered raster as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `output_path`
pub fn export_png(raster: &ImageBuffer<Rgb<u8>, Vec<u8>>, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| RenderError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    raster
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| RenderError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::info!(
        path = %output_path.display(),
        width = raster.width(),
        height = raster.height(),
        "image written"
    );
    Ok(())
}

/// Render the grid and write it to `output_path` in one step
///
/// # Errors
///
/// Returns an error if rendering or export fails
pub fn render_to_png(
    grid: &IterationGrid,
    palette: Palette,
    coloring: Coloring,
    output_path: &Path,
) -> Result<()> {
    let raster = render(grid, palette, coloring)?;
    export_png(&raster, output_path)
}
