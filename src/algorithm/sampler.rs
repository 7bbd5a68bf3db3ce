//! Grid sampling of the escape-time evaluator over a region
//!
//! Every cell is independent, so the parallel path hands whole grid columns
//! to rayon's work-stealing pool. Each column is written by exactly one
//! worker and the result is identical to the sequential pass.

use ndarray::{Array2, ArrayViewMut1, Axis};
use num_complex::Complex64;
use rayon::prelude::*;

use crate::algorithm::escape::EscapeTime;
use crate::io::configuration::RenderConfig;
use crate::io::error::Result;
use crate::spatial::axis::spacing;
use crate::spatial::{IterationGrid, Region};

/// Samples a square grid of a region with a fixed evaluator
#[derive(Debug, Clone, Copy)]
pub struct GridSampler {
    region: Region,
    resolution: usize,
    evaluator: EscapeTime,
    parallel: bool,
}

impl GridSampler {
    /// Build a sampler from a run configuration
    ///
    /// # Errors
    ///
    /// Returns [`crate::RenderError::Configuration`] if the configuration
    /// fails validation
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            region: config.region,
            resolution: config.resolution,
            evaluator: EscapeTime::new(config.max_iter, config.interior_check)?,
            parallel: config.parallel,
        })
    }

    /// Grid points along each axis
    pub const fn resolution(&self) -> usize {
        self.resolution
    }

    /// Sampled region
    pub const fn region(&self) -> &Region {
        &self.region
    }

    /// Evaluate every cell of the grid
    pub fn sample(&self) -> IterationGrid {
        self.sample_with_progress(|| {})
    }

    /// Evaluate every cell, calling `on_column_done` once per finished grid column
    ///
    /// On the parallel path the callback runs on worker threads, in no
    /// particular order.
    #[tracing::instrument(
        skip_all,
        fields(
            resolution = self.resolution,
            max_iter = self.evaluator.max_iter(),
            parallel = self.parallel
        )
    )]
    pub fn sample_with_progress<F>(&self, on_column_done: F) -> IterationGrid
    where
        F: Fn() + Sync,
    {
        let x_axis = self.region.x_axis(self.resolution);
        let y_axis = self.region.y_axis(self.resolution);
        tracing::debug!(
            dx = spacing(self.region.x_min, self.region.x_max, self.resolution),
            dy = spacing(self.region.y_min, self.region.y_max, self.resolution),
            "sampling grid"
        );

        let mut counts = Array2::<u32>::zeros((x_axis.len(), y_axis.len()));
        let evaluator = self.evaluator;

        let fill_column = |(i, mut column): (usize, ArrayViewMut1<'_, u32>)| {
            let re = x_axis.get(i).copied().unwrap_or_default();
            for (cell, &im) in column.iter_mut().zip(y_axis.iter()) {
                *cell = evaluator.evaluate(Complex64::new(re, im));
            }
            on_column_done();
        };

        if self.parallel {
            counts
                .axis_iter_mut(Axis(0))
                .into_par_iter()
                .enumerate()
                .for_each(fill_column);
        } else {
            counts
                .axis_iter_mut(Axis(0))
                .enumerate()
                .for_each(fill_column);
        }

        IterationGrid::from_sampled(counts, x_axis, y_axis, evaluator.max_iter())
    }
}
