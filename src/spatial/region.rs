//! Rectangular sampling region of the complex plane

use crate::io::configuration::{DEFAULT_X_MAX, DEFAULT_X_MIN, DEFAULT_Y_MAX, DEFAULT_Y_MIN};
use crate::spatial::axis::evenly_spaced;
use ndarray::Array1;
use std::fmt;

/// Axis-aligned rectangle `[x_min, x_max] x [y_min, y_max]`
///
/// The real part runs along `x` and the imaginary part along `y`. Bounds are
/// inclusive; both endpoints of each axis are sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Lower real bound (inclusive)
    pub x_min: f64,
    /// Upper real bound (inclusive)
    pub x_max: f64,
    /// Lower imaginary bound (inclusive)
    pub y_min: f64,
    /// Upper imaginary bound (inclusive)
    pub y_max: f64,
}

impl Default for Region {
    fn default() -> Self {
        Self::new(DEFAULT_X_MIN, DEFAULT_X_MAX, DEFAULT_Y_MIN, DEFAULT_Y_MAX)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.y_min, self.y_max
        )
    }
}

impl Region {
    /// Create a region from its four bounds without validating them
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Width of the real interval
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the imaginary interval
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// List every constraint the bounds violate
    ///
    /// An empty list means the region can be sampled.
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        let bounds = [
            ("x_min", self.x_min),
            ("x_max", self.x_max),
            ("y_min", self.y_min),
            ("y_max", self.y_max),
        ];
        for (name, value) in bounds {
            if !value.is_finite() {
                violations.push(format!("{name} must be finite (got {value})"));
            }
        }

        // NaN bounds are already reported above and compare false here
        if self.x_min.is_finite() && self.x_max.is_finite() && self.x_min >= self.x_max {
            violations.push(format!(
                "x_min must be less than x_max (got {} >= {})",
                self.x_min, self.x_max
            ));
        }
        if self.y_min.is_finite() && self.y_max.is_finite() && self.y_min >= self.y_max {
            violations.push(format!(
                "y_min must be less than y_max (got {} >= {})",
                self.y_min, self.y_max
            ));
        }

        violations
    }

    /// Evenly spaced real-axis samples, both endpoints included
    pub fn x_axis(&self, num_points: usize) -> Array1<f64> {
        evenly_spaced(self.x_min, self.x_max, num_points)
    }

    /// Evenly spaced imaginary-axis samples, both endpoints included
    pub fn y_axis(&self, num_points: usize) -> Array1<f64> {
        evenly_spaced(self.y_min, self.y_max, num_points)
    }
}
