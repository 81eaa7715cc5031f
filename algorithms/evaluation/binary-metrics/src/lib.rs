//! Binary classification evaluation.
//!
//! Every routine takes ground-truth labels, predictions or
//! positive-class probabilities, and the label to treat as positive. All
//! other labels count as negative. Results are plain structs with no
//! rendering attached, so any plotting frontend can draw them.
//!
//! | Function | Result |
//! |----------|--------|
//! | [`evaluate_classification_metrics`] | confusion counts, accuracy, precision, recall, specificity, F1 |
//! | [`calibration_curve`] | observed positive rate per probability bin |
//! | [`probability_histograms`] | probabilities split by true class |
//! | [`roc_curve`] | TPR / FPR at 11 thresholds |
//! | [`classification_outcomes`], [`MeshGrid`] | 2D decision-plot data |
//!
//! Ratios with a zero denominator are 0, never NaN, so curves stay defined
//! at degenerate thresholds. The one deliberate NaN is an empty
//! calibration bin.

pub mod bins;
pub mod calibration;
pub mod confusion;
pub mod diagnostics;
pub mod error;
pub mod histogram;
pub mod roc;

pub use calibration::{CalibrationCurve, calibration_curve};
pub use confusion::{ClassificationMetrics, ConfusionMatrix, binarize, evaluate_classification_metrics};
pub use diagnostics::{MeshGrid, Outcome, classification_outcomes, contour_levels};
pub use error::MetricsError;
pub use histogram::{Histogram, ProbabilityHistograms, probability_histograms};
pub use roc::{ROC_THRESHOLDS, RocCurve, roc_curve};

/// Bin count used by the calibration curve and histograms when callers
/// have no preference.
pub const DEFAULT_N_BINS: usize = 10;
