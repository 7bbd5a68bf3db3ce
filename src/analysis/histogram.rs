//! Histogram coloring: cumulative-frequency normalization of escape counts
//!
//! Raw counts crowd most of the palette into the few cells with long escape
//! times. Normalizing by the cumulative distribution of counts spreads the
//! palette evenly over the cells that actually occur.

use ndarray::Array2;

use crate::spatial::IterationGrid;

/// Number of cells holding each escape count
///
/// The result has one entry per count up to the grid's largest; index `0`
/// counts bounded cells and index `k` counts cells that escaped on
/// iteration `k`.
pub fn iteration_histogram(grid: &IterationGrid) -> Vec<usize> {
    let mut histogram = vec![0_usize; grid.max_count() as usize + 1];
    for &count in grid.counts() {
        if let Some(bin) = histogram.get_mut(count as usize) {
            *bin += 1;
        }
    }
    histogram
}

/// Running total of escaped cells with count at or below each index
///
/// Entry `0` is always `0` so bounded cells never contribute.
pub fn cumulative_escaped(histogram: &[usize]) -> Vec<usize> {
    let mut running = 0_usize;
    histogram
        .iter()
        .enumerate()
        .map(|(count, &cells)| {
            if count > 0 {
                running += cells;
            }
            running
        })
        .collect()
}

/// Map each cell to the fraction of escaped cells whose count is at or below its own
///
/// Escaped cells land in `(0, 1]` with the largest count at exactly `1.0`;
/// bounded cells map to `0.0`. The ordering of counts is preserved.
pub fn histogram_normalize(grid: &IterationGrid) -> Array2<f64> {
    let cumulative = cumulative_escaped(&iteration_histogram(grid));
    let escaped_total = cumulative.last().copied().unwrap_or(0);

    if escaped_total == 0 {
        return Array2::zeros(grid.dim());
    }

    let total = escaped_total as f64;
    grid.counts().mapv(|count| {
        if count == 0 {
            0.0
        } else {
            cumulative.get(count as usize).copied().unwrap_or(escaped_total) as f64 / total
        }
    })
}
