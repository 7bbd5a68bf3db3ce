//! Escape-time evaluation of the quadratic map `z -> z^2 + c`

use num_complex::Complex64;

use crate::io::configuration::ESCAPE_RADIUS_SQUARED;
use crate::io::error::{Result, invalid_argument};

/// Escape-time evaluator with a fixed iteration budget
///
/// Iterates `z_0 = 0`, `z_n = z_{n-1}^2 + c` and reports the first `n` with
/// `|z_n| >= 2`, or `0` when no such `n <= max_iter` exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeTime {
    max_iter: u32,
    interior_check: bool,
}

impl EscapeTime {
    /// Create an evaluator for the given budget
    ///
    /// With `interior_check` enabled, points strictly inside the main
    /// cardioid or the period-2 bulb return `0` without iterating. The
    /// results are identical either way.
    ///
    /// # Errors
    ///
    /// Returns [`crate::RenderError::InvalidArgument`] if `max_iter` is zero
    pub fn new(max_iter: u32, interior_check: bool) -> Result<Self> {
        if max_iter == 0 {
            return Err(invalid_argument(
                "max_iter",
                &max_iter,
                &"iteration budget must be positive",
            ));
        }
        Ok(Self {
            max_iter,
            interior_check,
        })
    }

    /// Iteration budget
    pub const fn max_iter(&self) -> u32 {
        self.max_iter
    }

    /// Whether the cardioid and bulb shortcut is enabled
    pub const fn interior_check(&self) -> bool {
        self.interior_check
    }

    /// Escape count of `c`, `0` if it stays bounded for the whole budget
    ///
    /// `c` must be finite; callers sampling a validated region satisfy this.
    /// Use [`escape_time`] for unchecked input.
    pub fn evaluate(&self, c: Complex64) -> u32 {
        if self.interior_check && in_main_interior(c) {
            return 0;
        }

        let mut z = Complex64::new(0.0, 0.0);
        for iteration in 1..=self.max_iter {
            z = z * z + c;
            if z.norm_sqr() >= ESCAPE_RADIUS_SQUARED {
                return iteration;
            }
        }
        0
    }
}

/// Escape count of `c` for a budget of `max_iter` iterations
///
/// Returns the smallest `n <= max_iter` with `|z_n| >= 2`, or `0` if the
/// point never escapes within the budget.
///
/// # Errors
///
/// Returns [`crate::RenderError::InvalidArgument`] if:
/// - Either component of `c` is NaN or infinite
/// - `max_iter` is zero
pub fn escape_time(c: Complex64, max_iter: u32) -> Result<u32> {
    if !c.is_finite() {
        return Err(invalid_argument(
            "c",
            &c,
            &"coordinate must be finite",
        ));
    }
    Ok(EscapeTime::new(max_iter, false)?.evaluate(c))
}

/// Whether `c` lies strictly inside the main cardioid or the period-2 bulb
///
/// Both regions are contained in the Mandelbrot set, so their points never
/// escape.
pub fn in_main_interior(c: Complex64) -> bool {
    let x_shifted = c.re - 0.25;
    let y_squared = c.im * c.im;
    let q = x_shifted.mul_add(x_shifted, y_squared);
    if q * (q + x_shifted) < 0.25 * y_squared {
        return true;
    }

    let x_bulb = c.re + 1.0;
    x_bulb.mul_add(x_bulb, y_squared) < 0.0625
}
