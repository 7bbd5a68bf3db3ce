//! Evenly spaced axis sampling

use ndarray::Array1;
use num_traits::Float;

/// Produce `count` evenly spaced samples over `[start, end]`
///
/// Both endpoints are included and the final sample is exactly `end`, so
/// rounding in the step never moves the upper bound. A single sample is
/// `start`; zero samples gives an empty axis.
pub fn evenly_spaced<T: Float>(start: T, end: T, count: usize) -> Array1<T> {
    match count {
        0 => Array1::from_vec(Vec::new()),
        1 => Array1::from_elem(1, start),
        _ => {
            let last = count - 1;
            let divisor = T::from(last).unwrap_or_else(T::one);
            let step = (end - start) / divisor;
            Array1::from_shape_fn(count, |i| {
                if i == last {
                    end
                } else {
                    T::from(i).map_or(start, |k| k * step + start)
                }
            })
        }
    }
}

/// Distance between neighbouring samples of an evenly spaced axis
///
/// Returns zero when fewer than two samples exist.
pub fn spacing<T: Float>(start: T, end: T, count: usize) -> T {
    if count < 2 {
        return T::zero();
    }
    T::from(count - 1).map_or_else(T::zero, |divisor| (end - start) / divisor)
}
