//! Escape-time sampling and rendering of the Mandelbrot set
//!
//! A rectangular region of the complex plane is sampled on an evenly spaced
//! grid, each sample is iterated under `z -> z^2 + c` until it escapes or the
//! budget runs out, and the resulting counts are rendered through a color
//! palette.

#![forbid(unsafe_code)]

/// Escape-time evaluation, grid sampling and the run entry point
pub mod algorithm;
/// Histogram normalization and grid statistics
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Mathematical utilities for color interpolation
pub mod math;
/// Sampling regions, axes and the iteration grid
pub mod spatial;

pub use algorithm::escape::{EscapeTime, escape_time};
pub use algorithm::executor::run;
pub use analysis::histogram::histogram_normalize;
pub use io::configuration::{Coloring, RenderConfig};
pub use io::error::{RenderError, Result};
pub use io::image::{export_png, render};
pub use io::palette::Palette;
pub use spatial::{IterationGrid, Region};
