//! Data behind a two-feature decision plot: per-sample outcomes and a
//! probability surface sampled on a regular grid.
//!
//! The grid does not know about any model. Feed [`MeshGrid::points`] to a
//! classifier's `predict_proba` and hand the result back to
//! [`MeshGrid::probability_surface`].

use ndarray::{Array1, Array2, ArrayView2};

use crate::bins::linspace;
use crate::error::{MetricsError, check_parallel};

/// Where a single prediction lands in the confusion matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub enum Outcome {
    TruePositive,
    FalsePositive,
    FalseNegative,
    TrueNegative,
}

impl Outcome {
    pub fn new(actual_positive: bool, predicted_positive: bool) -> Self {
        match (actual_positive, predicted_positive) {
            (true, true) => Outcome::TruePositive,
            (false, true) => Outcome::FalsePositive,
            (true, false) => Outcome::FalseNegative,
            (false, false) => Outcome::TrueNegative,
        }
    }
}

/// Outcome of every sample, in input order.
pub fn classification_outcomes<L: PartialEq>(
    y_true: &[L],
    y_pred: &[L],
    positive_label: &L,
) -> Result<Vec<Outcome>, MetricsError> {
    check_parallel(y_true.len(), y_pred.len())?;
    Ok(y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| Outcome::new(t == positive_label, p == positive_label))
        .collect())
}

/// Probability levels at which contour lines are drawn: 0.0, 0.1, …, 1.0.
pub fn contour_levels() -> Vec<f64> {
    linspace(0.0, 1.0, 11).to_vec()
}

/// Regular `n × n` lattice covering a 2D feature set with a margin of 1 on
/// every side.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct MeshGrid {
    xs: Array1<f64>,
    ys: Array1<f64>,
}

impl MeshGrid {
    /// Builds a grid spanning `[min - 1, max + 1]` on each of the two
    /// feature columns, with `grid_points_n` points per axis.
    ///
    /// # Errors
    ///
    /// [`MetricsError::NotTwoDimensional`], [`MetricsError::EmptyFeatures`]
    /// or [`MetricsError::InvalidGridSize`] if `grid_points_n < 2`.
    pub fn around(features: ArrayView2<f64>, grid_points_n: usize) -> Result<Self, MetricsError> {
        if features.ncols() != 2 {
            return Err(MetricsError::NotTwoDimensional {
                ncols: features.ncols(),
            });
        }
        if features.nrows() == 0 {
            return Err(MetricsError::EmptyFeatures);
        }
        if grid_points_n < 2 {
            return Err(MetricsError::InvalidGridSize { n: grid_points_n });
        }

        let axis = |col: usize| {
            let column = features.column(col);
            let lo = column.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            linspace(lo - 1.0, hi + 1.0, grid_points_n)
        };
        Ok(Self {
            xs: axis(0),
            ys: axis(1),
        })
    }

    pub fn xs(&self) -> &Array1<f64> {
        &self.xs
    }

    pub fn ys(&self) -> &Array1<f64> {
        &self.ys
    }

    /// Points per axis.
    pub fn resolution(&self) -> usize {
        self.xs.len()
    }

    /// All grid points as an `n² × 2` matrix. Row `j * n + i` is
    /// `(xs[i], ys[j])`, so x varies fastest.
    pub fn points(&self) -> Array2<f64> {
        let n = self.resolution();
        Array2::from_shape_fn((n * n, 2), |(row, col)| match col {
            0 => self.xs[row % n],
            _ => self.ys[row / n],
        })
    }

    /// Reshapes column `column` of a probability matrix computed on
    /// [`points`](Self::points) into an `n × n` surface indexed `[y, x]`.
    ///
    /// # Errors
    ///
    /// [`MetricsError::ProbabilityShape`] if `probs` does not have one row
    /// per grid point or has no such column.
    pub fn probability_surface(
        &self,
        probs: ArrayView2<f64>,
        column: usize,
    ) -> Result<Array2<f64>, MetricsError> {
        let n = self.resolution();
        if probs.nrows() != n * n || column >= probs.ncols() {
            return Err(MetricsError::ProbabilityShape {
                rows: probs.nrows(),
                cols: probs.ncols(),
                expected_rows: n * n,
                column,
            });
        }
        Ok(Array2::from_shape_fn((n, n), |(j, i)| probs[[j * n + i, column]]))
    }
}
