//! Post-processing of sampled iteration grids

/// Cumulative-frequency normalization for histogram coloring
pub mod histogram;
/// Summary statistics of bounded and escaped cells
pub mod statistics;
