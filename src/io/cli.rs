//! Command-line interface for rendering escape-time images

use crate::algorithm::executor::run_with_progress;
use crate::io::configuration::{
    Coloring, DEFAULT_MAX_ITER, DEFAULT_OUTPUT_PATH, DEFAULT_RESOLUTION, DEFAULT_X_MAX,
    DEFAULT_X_MIN, DEFAULT_Y_MAX, DEFAULT_Y_MIN, RenderConfig,
};
use crate::io::error::Result;
use crate::io::image::render_to_png;
use crate::io::palette::Palette;
use crate::io::progress::SamplingProgress;
use crate::spatial::Region;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mandelgrid")]
#[command(
    version,
    about = "Sample the Mandelbrot set on a grid and render an escape-time image",
    allow_negative_numbers = true
)]
/// Command-line arguments for a single render
pub struct Cli {
    /// Iteration budget per sample point
    #[arg(short = 'i', long, default_value_t = DEFAULT_MAX_ITER)]
    pub max_iter: u32,

    /// Grid points along each axis
    #[arg(short = 'n', long, default_value_t = DEFAULT_RESOLUTION)]
    pub resolution: usize,

    /// Lower real bound
    #[arg(long, default_value_t = DEFAULT_X_MIN)]
    pub x_min: f64,

    /// Upper real bound
    #[arg(long, default_value_t = DEFAULT_X_MAX)]
    pub x_max: f64,

    /// Lower imaginary bound
    #[arg(long, default_value_t = DEFAULT_Y_MIN)]
    pub y_min: f64,

    /// Upper imaginary bound
    #[arg(long, default_value_t = DEFAULT_Y_MAX)]
    pub y_max: f64,

    /// Color scale used for rendering
    #[arg(short, long, value_enum, default_value_t = Palette::Magma)]
    pub palette: Palette,

    /// Mapping from iteration counts to palette positions
    #[arg(short, long, value_enum, default_value_t = Coloring::Raw)]
    pub coloring: Coloring,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Sample on the calling thread only
    #[arg(long)]
    pub sequential: bool,

    /// Iterate every point, including those inside the main cardioid and bulb
    #[arg(long)]
    pub no_interior_check: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Run configuration described by the arguments
    pub const fn to_config(&self) -> RenderConfig {
        RenderConfig {
            max_iter: self.max_iter,
            region: Region::new(self.x_min, self.x_max, self.y_min, self.y_max),
            resolution: self.resolution,
            palette: self.palette,
            coloring: self.coloring,
            parallel: !self.sequential,
            interior_check: !self.no_interior_check,
        }
    }
}

/// Drives one sample-render-export cycle from parsed arguments
pub struct RenderCommand {
    cli: Cli,
}

impl RenderCommand {
    /// Create a command for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Sample, render and write the image
    ///
    /// Validation happens when the run builds its sampler, before any
    /// progress is drawn or file is written.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration violates any constraint
    /// - The image cannot be rendered or written
    pub fn execute(&self) -> Result<()> {
        let start_time = Instant::now();
        let config = self.cli.to_config();

        let progress = SamplingProgress::new(config.resolution, self.cli.should_show_progress());
        let grid = run_with_progress(&config, || progress.column_done())?;
        progress.finish();

        render_to_png(&grid, config.palette, config.coloring, &self.cli.output)?;

        tracing::info!(
            output = %self.cli.output.display(),
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "render finished"
        );
        Ok(())
    }
}
