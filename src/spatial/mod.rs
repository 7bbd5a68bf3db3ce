//! Spatial data structures for sampling the complex plane
//!
//! This module contains spatial-related functionality including:
//! - Evenly spaced axis generation
//! - Sampling region bounds and their validation
//! - The dense iteration grid produced by a sampling pass

/// Evenly spaced axis sampling
pub mod axis;
/// Iteration grid storage and coordinate lookup
pub mod grid;
/// Rectangular region bounds and validation
pub mod region;

pub use grid::IterationGrid;
pub use region::Region;
