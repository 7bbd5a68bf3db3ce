//! Natural cubic spline through a set of knots
//!
//! Second derivatives are zero at both ends, which keeps curves through
//! palette control colors free of end-point overshoot.

use std::error::Error;
use std::fmt;

/// Error type for interpolation operations
#[derive(Debug, Clone)]
pub struct InterpolationError {
    message: String,
}

impl fmt::Display for InterpolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Interpolation error: {}", self.message)
    }
}

impl Error for InterpolationError {}

impl InterpolationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Piecewise cubic interpolation with natural boundary conditions
#[derive(Debug, Clone)]
pub struct Cubic {
    knots: Vec<f64>,
    values: Vec<f64>,
    second_derivatives: Vec<f64>,
}

impl Cubic {
    /// Fit a spline through `(knots[k], values[k])`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `knots` and `values` have different lengths
    /// - Fewer than 2 points are provided
    /// - The knots are not strictly increasing and finite
    pub fn new(knots: Vec<f64>, values: Vec<f64>) -> Result<Self, InterpolationError> {
        if knots.len() != values.len() {
            return Err(InterpolationError::new(
                "knots and values must have the same length",
            ));
        }
        if knots.len() < 2 {
            return Err(InterpolationError::new(
                "Need at least 2 points for interpolation",
            ));
        }
        if knots.iter().any(|k| !k.is_finite()) || values.iter().any(|v| !v.is_finite()) {
            return Err(InterpolationError::new("knots and values must be finite"));
        }
        if knots.windows(2).any(|w| matches!(w, [a, b] if a >= b)) {
            return Err(InterpolationError::new(
                "knots must be strictly increasing",
            ));
        }

        let second_derivatives = solve_second_derivatives(&knots, &values);

        Ok(Self {
            knots,
            values,
            second_derivatives,
        })
    }

    /// Evaluate the spline at `x`
    ///
    /// Inputs outside the knot range clamp to the nearest end value.
    pub fn evaluate(&self, x: f64) -> f64 {
        let (Some(&first_knot), Some(&last_knot)) = (self.knots.first(), self.knots.last()) else {
            return 0.0;
        };
        if x <= first_knot {
            return self.values.first().copied().unwrap_or(0.0);
        }
        if x >= last_knot {
            return self.values.last().copied().unwrap_or(0.0);
        }

        // First knot strictly greater than x; x is interior so hi is in 1..len
        let hi = self.knots.partition_point(|&k| k <= x);
        let lo = hi - 1;

        let (Some(&x_lo), Some(&x_hi)) = (self.knots.get(lo), self.knots.get(hi)) else {
            return 0.0;
        };
        let y_lo = self.values.get(lo).copied().unwrap_or(0.0);
        let y_hi = self.values.get(hi).copied().unwrap_or(0.0);
        let sd_lo = self.second_derivatives.get(lo).copied().unwrap_or(0.0);
        let sd_hi = self.second_derivatives.get(hi).copied().unwrap_or(0.0);

        let h = x_hi - x_lo;
        let a = (x_hi - x) / h;
        let b = (x - x_lo) / h;

        a * y_lo
            + b * y_hi
            + ((a.powi(3) - a) * sd_lo + (b.powi(3) - b) * sd_hi) * h.powi(2) / 6.0
    }
}

// Tridiagonal sweep for the natural spline; inputs are validated by the caller
fn solve_second_derivatives(knots: &[f64], values: &[f64]) -> Vec<f64> {
    let n = knots.len();
    let mut second = vec![0.0; n];
    let mut decomposed = vec![0.0; n];

    for i in 1..n.saturating_sub(1) {
        let (Some(&x_prev), Some(&x_i), Some(&x_next)) =
            (knots.get(i - 1), knots.get(i), knots.get(i + 1))
        else {
            continue;
        };
        let (Some(&y_prev), Some(&y_i), Some(&y_next)) =
            (values.get(i - 1), values.get(i), values.get(i + 1))
        else {
            continue;
        };
        let sd_prev = second.get(i - 1).copied().unwrap_or(0.0);
        let u_prev = decomposed.get(i - 1).copied().unwrap_or(0.0);

        let sig = (x_i - x_prev) / (x_next - x_prev);
        let p = sig.mul_add(sd_prev, 2.0);
        let slope_change = (y_next - y_i) / (x_next - x_i) - (y_i - y_prev) / (x_i - x_prev);

        if let Some(sd) = second.get_mut(i) {
            *sd = (sig - 1.0) / p;
        }
        if let Some(u) = decomposed.get_mut(i) {
            *u = sig.mul_add(-u_prev, 6.0 * slope_change / (x_next - x_prev)) / p;
        }
    }

    for k in (0..n.saturating_sub(1)).rev() {
        let next = second.get(k + 1).copied().unwrap_or(0.0);
        let u_k = decomposed.get(k).copied().unwrap_or(0.0);
        if let Some(sd) = second.get_mut(k) {
            *sd = sd.mul_add(next, u_k);
        }
    }

    second
}
