/// Command-line parsing and the render command
pub mod cli;
/// Run constants, defaults and configuration validation
pub mod configuration;
/// Error types shared across the crate
pub mod error;
/// Raster rendering and PNG export
pub mod image;
/// Named color scales and continuous color maps
pub mod palette;
/// Progress display for the sampling pass
pub mod progress;
