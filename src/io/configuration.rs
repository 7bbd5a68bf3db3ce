//! Run constants, configuration defaults and validation

use crate::io::error::{RenderError, Result};
use crate::io::palette::Palette;
use crate::spatial::region::Region;
use std::fmt;
use std::str::FromStr;

/// Magnitude at or above which an iterate is treated as diverging
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Squared escape radius, compared against `|z|^2` to avoid a square root
pub const ESCAPE_RADIUS_SQUARED: f64 = ESCAPE_RADIUS * ESCAPE_RADIUS;

// Default values for configurable parameters
/// Default iteration budget per sample point
pub const DEFAULT_MAX_ITER: u32 = 500;
/// Default number of grid points along each axis
pub const DEFAULT_RESOLUTION: usize = 500;
/// Default lower real bound
pub const DEFAULT_X_MIN: f64 = -2.0;
/// Default upper real bound
pub const DEFAULT_X_MAX: f64 = 1.0;
/// Default lower imaginary bound
pub const DEFAULT_Y_MIN: f64 = -1.0;
/// Default upper imaginary bound
pub const DEFAULT_Y_MAX: f64 = 1.0;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid points per axis
pub const MAX_RESOLUTION: usize = 10_000;

// Output settings
/// Default path of the rendered PNG
pub const DEFAULT_OUTPUT_PATH: &str = "mandelbrot.png";
/// Width of the sampling progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// How iteration counts are turned into palette positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Coloring {
    /// Linear in the raw iteration count, scaled by the grid maximum
    #[default]
    Raw,
    /// Cumulative frequency of escape counts across the grid
    Histogram,
}

impl fmt::Display for Coloring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => write!(f, "raw"),
            Self::Histogram => write!(f, "histogram"),
        }
    }
}

impl FromStr for Coloring {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(Self::Raw),
            "histogram" => Ok(Self::Histogram),
            _ => Err(crate::io::error::invalid_argument(
                "coloring",
                &s,
                &"expected 'raw' or 'histogram'",
            )),
        }
    }
}

/// Every parameter of a single sampling and rendering run
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Iteration budget per sample point
    pub max_iter: u32,
    /// Sampled region of the complex plane
    pub region: Region,
    /// Grid points along each axis (the grid is `resolution x resolution`)
    pub resolution: usize,
    /// Color scale used by the renderer
    pub palette: Palette,
    /// Mapping from iteration counts to palette positions
    pub coloring: Coloring,
    /// Sample grid columns on the rayon thread pool
    pub parallel: bool,
    /// Skip iteration for points inside the main cardioid and period-2 bulb
    pub interior_check: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            region: Region::default(),
            resolution: DEFAULT_RESOLUTION,
            palette: Palette::default(),
            coloring: Coloring::default(),
            parallel: true,
            interior_check: true,
        }
    }
}

impl RenderConfig {
    /// Check every constraint and report all violations together
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Configuration`] if:
    /// - `max_iter` is zero
    /// - `resolution` is zero or exceeds [`MAX_RESOLUTION`]
    /// - Any region bound is non-finite or a lower bound is not below its upper bound
    pub fn validate(&self) -> Result<()> {
        let mut violations = Vec::new();

        if self.max_iter == 0 {
            violations.push("max_iter must be positive".to_string());
        }
        if self.resolution == 0 {
            violations.push("resolution must be positive".to_string());
        } else if self.resolution > MAX_RESOLUTION {
            violations.push(format!(
                "resolution must not exceed {MAX_RESOLUTION} (got {})",
                self.resolution
            ));
        }
        violations.extend(self.region.violations());

        if violations.is_empty() {
            tracing::debug!(
                max_iter = self.max_iter,
                resolution = self.resolution,
                region = %self.region,
                palette = %self.palette,
                coloring = %self.coloring,
                "configuration validated"
            );
            Ok(())
        } else {
            Err(RenderError::Configuration { violations })
        }
    }
}
