//! Evenly spaced grids shared by the binning and threshold routines.

use ndarray::Array1;

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// Interior values are `start + i * step` and, for `n > 1`, the last value is
/// pinned to `end`. So `linspace(0.0, 1.0, 11)[3]` is `0.30000000000000004`,
/// not `0.3`; membership tests against these edges depend on that.
pub fn linspace(start: f64, end: f64, n: usize) -> Array1<f64> {
    let mut values = Array1::linspace(start, end, n);
    if n > 1 {
        values[n - 1] = end;
    }
    values
}

/// The `n_bins + 1` edges of `n_bins` equal-width bins over `[0, 1]`.
pub fn unit_edges(n_bins: usize) -> Array1<f64> {
    linspace(0.0, 1.0, n_bins + 1)
}

/// Midpoints between consecutive edges.
pub fn centers(edges: &Array1<f64>) -> Vec<f64> {
    edges
        .windows(2)
        .into_iter()
        .map(|w| (w[0] + w[1]) / 2.0)
        .collect()
}
