use ndarray::ArrayView1;

use crate::Float;

/// Errors raised by the checked distance entry points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DistanceError {
    /// The two vectors do not have the same number of components.
    #[error("cannot compare vectors of length {left} and {right}")]
    DimensionMismatch {
        /// Length of the first vector.
        left: usize,
        /// Length of the second vector.
        right: usize,
    },

    /// The Minkowski order must be a positive integer.
    #[error("Minkowski order must be >= 1, got {p}")]
    InvalidOrder {
        /// The rejected order.
        p: usize,
    },
}

/// A metric between two feature vectors of equal length.
///
/// Implementations may assume matching lengths; callers that cannot
/// guarantee it should go through [`minkowski_distance`] or validate first.
pub trait Distance<F: Float>: Clone + Send + Sync {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F;
}

/// Minkowski distance of integer order `p`: `(Σ|aᵢ − bᵢ|^p)^(1/p)`.
///
/// `p = 1` is the Manhattan distance and `p = 2` the Euclidean one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Minkowski {
    p: usize,
}

impl Minkowski {
    /// Creates a metric of order `p`.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::InvalidOrder`] if `p` is zero.
    pub fn new(p: usize) -> Result<Self, DistanceError> {
        if p == 0 {
            return Err(DistanceError::InvalidOrder { p });
        }
        Ok(Self { p })
    }

    pub const fn manhattan() -> Self {
        Self { p: 1 }
    }

    pub const fn euclidean() -> Self {
        Self { p: 2 }
    }

    pub fn p(&self) -> usize {
        self.p
    }
}

impl Default for Minkowski {
    fn default() -> Self {
        Self::euclidean()
    }
}

impl<F: Float> Distance<F> for Minkowski {
    fn distance(&self, a: ArrayView1<F>, b: ArrayView1<F>) -> F {
        debug_assert_eq!(a.len(), b.len());
        let diffs = a.iter().zip(b.iter()).map(|(&x, &y)| (x - y).abs());
        match self.p {
            1 => diffs.sum(),
            2 => diffs.map(|d| d * d).sum::<F>().sqrt(),
            p => {
                // Orders are small in practice; saturate rather than wrap.
                let order = i32::try_from(p).unwrap_or(i32::MAX);
                let sum: F = diffs.map(|d| d.powi(order)).sum();
                sum.powf(F::from_count(p).recip())
            }
        }
    }
}

/// Checked Minkowski distance between `a` and `b`.
///
/// # Errors
///
/// Returns [`DistanceError::DimensionMismatch`] when the lengths differ and
/// [`DistanceError::InvalidOrder`] when `p` is zero.
pub fn minkowski_distance<F: Float>(
    a: ArrayView1<F>,
    b: ArrayView1<F>,
    p: usize,
) -> Result<F, DistanceError> {
    if a.len() != b.len() {
        return Err(DistanceError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(Minkowski::new(p)?.distance(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn manhattan_sums_absolute_differences() {
        let a = array![1.0, -2.0, 3.0];
        let b = array![4.0, 0.0, 3.0];
        assert_abs_diff_eq!(Minkowski::manhattan().distance(a.view(), b.view()), 5.0);
    }

    #[test]
    fn euclidean_is_the_default() {
        let a = array![0.0, 0.0];
        let b = array![3.0, 4.0];
        assert_abs_diff_eq!(Minkowski::default().distance(a.view(), b.view()), 5.0);
    }

    #[test]
    fn order_three_matches_closed_form() {
        let a = array![0.0_f64, 0.0];
        let b = array![1.0, 2.0];
        // (1 + 8)^(1/3)
        let expected = 9.0_f64.powf(1.0 / 3.0);
        assert_abs_diff_eq!(
            Minkowski::new(3).unwrap().distance(a.view(), b.view()),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn works_for_f32() {
        let a = array![1.0_f32, 1.0];
        let b = array![1.0_f32, 3.0];
        assert_abs_diff_eq!(Minkowski::euclidean().distance(a.view(), b.view()), 2.0_f32);
    }

    #[test]
    fn zero_order_is_rejected() {
        assert_eq!(Minkowski::new(0), Err(DistanceError::InvalidOrder { p: 0 }));
    }

    #[test]
    fn checked_distance_rejects_length_mismatch() {
        let a = array![1.0, 2.0];
        let b = array![1.0];
        assert_eq!(
            minkowski_distance(a.view(), b.view(), 2),
            Err(DistanceError::DimensionMismatch { left: 2, right: 1 })
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            DistanceError::InvalidOrder { p: 0 }.to_string(),
            "Minkowski order must be >= 1, got 0"
        );
        assert_eq!(
            DistanceError::DimensionMismatch { left: 3, right: 2 }.to_string(),
            "cannot compare vectors of length 3 and 2"
        );
    }
}
