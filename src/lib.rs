//! k-Nearest Neighbors classification with binary evaluation utilities.
//!
//! This crate ties the workspace together:
//!
//! * [`knn_helpers`]: the `Float` bound and the Minkowski distance family.
//! * [`k_nn`]: the classifier (`fit`, `predict`, `predict_proba`).
//! * [`binary_metrics`]: confusion metrics, calibration, histograms, ROC and
//!   2D decision-plot data, computed from any classifier's outputs.
//! * [`datasets`]: small seeded synthetic datasets for demos and tests.

pub mod datasets;

pub use binary_metrics as metrics;
pub use binary_metrics::{
    CalibrationCurve, ClassificationMetrics, ConfusionMatrix, DEFAULT_N_BINS, MeshGrid,
    MetricsError, Outcome, ProbabilityHistograms, RocCurve, calibration_curve,
    classification_outcomes, evaluate_classification_metrics, probability_histograms, roc_curve,
};
pub use k_nn::{KnnClassifier, KnnConfig, KnnError, LabelEncoder};
pub use knn_helpers::{Distance, DistanceError, Float, Minkowski, minkowski_distance};
