//! Dense iteration grid produced by a sampling pass
//!
//! Cell `(i, j)` holds the escape count of the coordinate `x[i] + i*y[j]`,
//! with `0` marking points that stayed bounded for the whole budget. The
//! grid keeps the axes it was sampled on so every cell can be mapped back
//! to its coordinate.

use ndarray::{Array1, Array2};
use num_complex::Complex64;

use crate::io::error::{RenderError, Result};

/// Escape counts for every sample of a region
#[derive(Debug, Clone, PartialEq)]
pub struct IterationGrid {
    /// Escape counts indexed by (`x index`, `y index`)
    counts: Array2<u32>,
    /// Real-axis samples, one per row
    x_axis: Array1<f64>,
    /// Imaginary-axis samples, one per column
    y_axis: Array1<f64>,
    /// Iteration budget the counts were computed with
    max_iter: u32,
}

impl IterationGrid {
    /// Assemble a grid from precomputed counts and the axes they were sampled on
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidArgument`] if:
    /// - The counts shape does not match `(x_axis.len(), y_axis.len())`
    /// - Any count exceeds `max_iter`
    pub fn new(
        counts: Array2<u32>,
        x_axis: Array1<f64>,
        y_axis: Array1<f64>,
        max_iter: u32,
    ) -> Result<Self> {
        let expected = (x_axis.len(), y_axis.len());
        if counts.dim() != expected {
            return Err(RenderError::InvalidArgument {
                parameter: "counts",
                value: format!("{:?}", counts.dim()),
                reason: format!("shape must match axes {expected:?}"),
            });
        }

        if let Some(&over) = counts.iter().find(|&&count| count > max_iter) {
            return Err(RenderError::InvalidArgument {
                parameter: "counts",
                value: over.to_string(),
                reason: format!("escape counts must not exceed max_iter {max_iter}"),
            });
        }

        Ok(Self {
            counts,
            x_axis,
            y_axis,
            max_iter,
        })
    }

    // Sampler output satisfies the shape and budget invariants by construction
    pub(crate) const fn from_sampled(
        counts: Array2<u32>,
        x_axis: Array1<f64>,
        y_axis: Array1<f64>,
        max_iter: u32,
    ) -> Self {
        Self {
            counts,
            x_axis,
            y_axis,
            max_iter,
        }
    }

    /// Raw escape counts
    pub const fn counts(&self) -> &Array2<u32> {
        &self.counts
    }

    /// Consume the grid and return the escape counts
    pub fn into_counts(self) -> Array2<u32> {
        self.counts
    }

    /// Real-axis samples
    pub const fn x_axis(&self) -> &Array1<f64> {
        &self.x_axis
    }

    /// Imaginary-axis samples
    pub const fn y_axis(&self) -> &Array1<f64> {
        &self.y_axis
    }

    /// Iteration budget the grid was sampled with
    pub const fn max_iter(&self) -> u32 {
        self.max_iter
    }

    /// Grid dimensions (`x samples`, `y samples`)
    pub fn dim(&self) -> (usize, usize) {
        self.counts.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Escape count at cell `(i, j)`
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        self.counts.get([i, j]).copied()
    }

    /// Complex coordinate sampled at cell `(i, j)`
    pub fn coordinate(&self, i: usize, j: usize) -> Option<Complex64> {
        let re = self.x_axis.get(i)?;
        let im = self.y_axis.get(j)?;
        Some(Complex64::new(*re, *im))
    }

    /// Largest escape count in the grid, `0` if nothing escaped
    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
