//! Summary statistics of a sampled iteration grid

use crate::spatial::IterationGrid;

/// Counts and escape-time moments for one grid
#[derive(Debug, Clone, PartialEq)]
pub struct GridStatistics {
    /// Number of cells in the grid
    pub total_cells: usize,
    /// Cells that stayed bounded for the whole budget (count `0`)
    pub bounded_cells: usize,
    /// Cells that escaped (count `>= 1`)
    pub escaped_cells: usize,
    /// Smallest escape count, `None` if nothing escaped
    pub min_escape: Option<u32>,
    /// Largest escape count, `None` if nothing escaped
    pub max_escape: Option<u32>,
    /// Mean escape count over escaped cells, `0.0` if nothing escaped
    pub mean_escape: f64,
}

impl GridStatistics {
    /// Gather statistics in a single pass over the grid
    pub fn from_grid(grid: &IterationGrid) -> Self {
        let mut escaped_cells = 0_usize;
        let mut min_escape: Option<u32> = None;
        let mut max_escape: Option<u32> = None;
        let mut sum = 0_u64;

        for &count in grid.counts() {
            if count == 0 {
                continue;
            }
            escaped_cells += 1;
            sum += u64::from(count);
            min_escape = Some(min_escape.map_or(count, |m| m.min(count)));
            max_escape = Some(max_escape.map_or(count, |m| m.max(count)));
        }

        let mean_escape = if escaped_cells == 0 {
            0.0
        } else {
            sum as f64 / escaped_cells as f64
        };

        Self {
            total_cells: grid.len(),
            bounded_cells: grid.len() - escaped_cells,
            escaped_cells,
            min_escape,
            max_escape,
            mean_escape,
        }
    }

    /// Fraction of cells that stayed bounded, `0.0` for an empty grid
    pub fn bounded_fraction(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            self.bounded_cells as f64 / self.total_cells as f64
        }
    }
}
