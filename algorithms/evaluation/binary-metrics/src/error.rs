//! Error type for the evaluation utilities.

/// Error type for all fallible operations in the binary-metrics crate.
///
/// Degenerate ratios (a zero denominator) are never errors; they evaluate
/// to 0 instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MetricsError {
    /// Ground truth and predictions are not parallel.
    #[error("y_true has {truth} entries but predictions have {predicted}")]
    LengthMismatch {
        /// Length of the ground truth.
        truth: usize,
        /// Length of the predictions or probabilities.
        predicted: usize,
    },

    /// Binning requires at least one bin.
    #[error("n_bins must be >= 1, got {n_bins}")]
    InvalidBins {
        /// The rejected bin count.
        n_bins: usize,
    },

    /// A mesh grid needs at least two points per axis.
    #[error("grid needs at least 2 points per axis, got {n}")]
    InvalidGridSize {
        /// The rejected resolution.
        n: usize,
    },

    /// Mesh grids are only defined for two feature columns.
    #[error("mesh grid needs exactly 2 feature columns, got {ncols}")]
    NotTwoDimensional {
        /// Columns in the feature matrix.
        ncols: usize,
    },

    /// A mesh grid cannot be built around zero samples.
    #[error("cannot build a mesh grid around an empty feature matrix")]
    EmptyFeatures,

    /// The probability matrix does not line up with the grid.
    #[error(
        "probability matrix is {rows}x{cols}, expected {expected_rows} rows and a column below {cols} (got {column})"
    )]
    ProbabilityShape {
        rows: usize,
        cols: usize,
        expected_rows: usize,
        column: usize,
    },
}

/// Fails unless `truth` and `predicted` have the same length.
pub(crate) fn check_parallel(truth: usize, predicted: usize) -> Result<(), MetricsError> {
    if truth != predicted {
        return Err(MetricsError::LengthMismatch { truth, predicted });
    }
    Ok(())
}

pub(crate) fn check_bins(n_bins: usize) -> Result<(), MetricsError> {
    if n_bins == 0 {
        return Err(MetricsError::InvalidBins { n_bins });
    }
    Ok(())
}
