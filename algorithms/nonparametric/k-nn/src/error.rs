//! Error type for the k-NN classifier.

use knn_helpers::DistanceError;

/// Errors that can occur when fitting or querying a [`KnnClassifier`](crate::KnnClassifier).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KnnError {
    /// The feature matrix and the label vector have different lengths.
    #[error("features have {features} rows but labels have {labels} entries")]
    LengthMismatch {
        /// Rows in the feature matrix.
        features: usize,
        /// Entries in the label vector.
        labels: usize,
    },

    /// k must be a positive integer.
    #[error("k must be a positive integer, got {k}")]
    InvalidK {
        /// The rejected k.
        k: usize,
    },

    /// p must be a positive integer.
    #[error("p must be a positive integer, got {p}")]
    InvalidP {
        /// The rejected p.
        p: usize,
    },

    /// Cannot fit a model on zero training rows.
    #[error("cannot fit on an empty training set")]
    EmptyTrainingSet,

    /// A query has a different number of features than the training set.
    #[error("query has {found} features but the model was fitted on {expected}")]
    DimensionMismatch {
        /// Training feature count.
        expected: usize,
        /// Query feature count.
        found: usize,
    },

    /// `predict` or `predict_proba` called before `fit`.
    #[error("model must be fitted before calling {operation}")]
    NotFitted {
        /// Name of the operation that was attempted.
        operation: &'static str,
    },

    #[error(transparent)]
    Distance(#[from] DistanceError),
}

impl KnnError {
    /// Whether this error stems from a bad argument rather than from the
    /// model's lifecycle.
    pub fn is_invalid_argument(&self) -> bool {
        !matches!(self, KnnError::NotFitted { .. })
    }
}
