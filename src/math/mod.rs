//! Mathematical utilities for color mapping

/// Natural cubic spline interpolation for smooth palette gradients
pub mod interpolation;
