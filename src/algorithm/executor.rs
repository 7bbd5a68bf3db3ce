//! Run entry point: configuration in, iteration grid out

use crate::algorithm::sampler::GridSampler;
use crate::analysis::statistics::GridStatistics;
use crate::io::configuration::RenderConfig;
use crate::io::error::Result;
use crate::spatial::IterationGrid;

/// Validate `config`, sample its region and return the iteration grid
///
/// Rendering is a separate step, see [`crate::io::image::render`].
///
/// # Errors
///
/// Returns [`crate::RenderError::Configuration`] listing every violated
/// constraint if the configuration is invalid
pub fn run(config: &RenderConfig) -> Result<IterationGrid> {
    run_with_progress(config, || {})
}

/// Same as [`run`], calling `on_column_done` after each sampled grid column
///
/// # Errors
///
/// Returns [`crate::RenderError::Configuration`] listing every violated
/// constraint if the configuration is invalid
#[tracing::instrument(skip_all, fields(region = %config.region, resolution = config.resolution))]
pub fn run_with_progress<F>(config: &RenderConfig, on_column_done: F) -> Result<IterationGrid>
where
    F: Fn() + Sync,
{
    let sampler = GridSampler::from_config(config)?;
    let grid = sampler.sample_with_progress(on_column_done);

    let stats = GridStatistics::from_grid(&grid);
    tracing::info!(
        cells = stats.total_cells,
        bounded = stats.bounded_cells,
        escaped = stats.escaped_cells,
        max_escape = stats.max_escape.unwrap_or(0),
        mean_escape = stats.mean_escape,
        "sampling complete"
    );

    Ok(grid)
}
