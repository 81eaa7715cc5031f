//! Shared numeric building blocks for the k-NN workspace: the [`Float`]
//! bound used by every algorithm crate and the Minkowski distance family.

use ndarray::NdFloat;

use std::iter::Sum;

mod distance;

pub use distance::{Distance, DistanceError, Minkowski, minkowski_distance};

/// Element type accepted by the distance and classifier code.
pub trait Float: NdFloat + Default + Sum + std::marker::Unpin {
    /// Converts an element count into the float type. Counts beyond the
    /// mantissa lose precision, they never fail.
    fn from_count(n: usize) -> Self;
}

impl Float for f32 {
    fn from_count(n: usize) -> Self {
        n as f32
    }
}

impl Float for f64 {
    fn from_count(n: usize) -> Self {
        n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_count_is_exact_for_small_counts() {
        assert_eq!(<f64 as Float>::from_count(7), 7.0);
        assert_eq!(<f32 as Float>::from_count(0), 0.0);
    }

    #[test]
    fn minkowski_accepts_both_widths() {
        let a = ndarray::array![0.0_f32, 0.0];
        let b = ndarray::array![3.0_f32, 4.0];
        assert_eq!(minkowski_distance(a.view(), b.view(), 1), Ok(7.0));
        let a = ndarray::array![0.0_f64, 0.0];
        let b = ndarray::array![3.0_f64, 4.0];
        assert_eq!(minkowski_distance(a.view(), b.view(), 2), Ok(5.0));
    }
}
