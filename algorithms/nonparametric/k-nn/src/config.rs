//! Hyperparameters for the k-NN classifier.

use crate::error::KnnError;

/// Number of neighbors used when none is given.
pub const DEFAULT_K: usize = 5;

/// Minkowski order used when none is given (Euclidean).
pub const DEFAULT_P: usize = 2;

/// Hyperparameters of a [`KnnClassifier`](crate::KnnClassifier).
///
/// # Example
///
/// ```
/// use k_nn::KnnConfig;
///
/// let config = KnnConfig::new().with_k(3).with_p(1);
/// assert_eq!((config.k(), config.p()), (3, 1));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct KnnConfig {
    /// Number of nearest neighbors that vote.
    k: usize,
    /// Order of the Minkowski distance.
    p: usize,
}

impl KnnConfig {
    /// Defaults: `k = 5`, `p = 2`.
    pub fn new() -> Self {
        Self {
            k: DEFAULT_K,
            p: DEFAULT_P,
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_p(mut self, p: usize) -> Self {
        self.p = p;
        self
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns an error if `k` or `p` is zero.
    pub fn validate(&self) -> Result<(), KnnError> {
        if self.k == 0 {
            return Err(KnnError::InvalidK { k: self.k });
        }
        if self.p == 0 {
            return Err(KnnError::InvalidP { p: self.p });
        }
        Ok(())
    }
}

impl Default for KnnConfig {
    fn default() -> Self {
        Self::new()
    }
}
