//! Confusion counts and the ratios derived from them.

use tracing::debug;

use crate::error::{MetricsError, check_parallel};

/// Maps labels to a 0/1 encoding: 1 for `positive_label`, 0 for anything else.
pub fn binarize<L: PartialEq>(labels: &[L], positive_label: &L) -> Vec<u8> {
    labels
        .iter()
        .map(|label| u8::from(label == positive_label))
        .collect()
}

/// `numerator / denominator`, or 0 when the denominator is 0.
pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Binary confusion counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ConfusionMatrix {
    pub true_negatives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub true_positives: usize,
}

impl ConfusionMatrix {
    /// Counts outcomes over parallel 0/1 vectors.
    ///
    /// # Errors
    ///
    /// [`MetricsError::LengthMismatch`] if the vectors differ in length.
    pub fn from_binary(truth: &[u8], predicted: &[u8]) -> Result<Self, MetricsError> {
        check_parallel(truth.len(), predicted.len())?;
        let mut cm = Self::default();
        for (&t, &p) in truth.iter().zip(predicted) {
            match (t == 1, p == 1) {
                (true, true) => cm.true_positives += 1,
                (false, false) => cm.true_negatives += 1,
                (false, true) => cm.false_positives += 1,
                (true, false) => cm.false_negatives += 1,
            }
        }
        Ok(cm)
    }

    /// Counts outcomes after binarizing both label vectors around `positive_label`.
    pub fn from_labels<L: PartialEq>(
        y_true: &[L],
        y_pred: &[L],
        positive_label: &L,
    ) -> Result<Self, MetricsError> {
        check_parallel(y_true.len(), y_pred.len())?;
        Self::from_binary(
            &binarize(y_true, positive_label),
            &binarize(y_pred, positive_label),
        )
    }

    /// `[TN, FP, FN, TP]`.
    pub fn as_array(&self) -> [usize; 4] {
        [
            self.true_negatives,
            self.false_positives,
            self.false_negatives,
            self.true_positives,
        ]
    }

    pub fn total(&self) -> usize {
        self.as_array().iter().sum()
    }

    pub fn accuracy(&self) -> f64 {
        ratio(self.true_positives + self.true_negatives, self.total())
    }

    pub fn precision(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_positives)
    }

    /// Also the true positive rate.
    pub fn recall(&self) -> f64 {
        ratio(self.true_positives, self.true_positives + self.false_negatives)
    }

    pub fn specificity(&self) -> f64 {
        ratio(self.true_negatives, self.true_negatives + self.false_positives)
    }

    pub fn false_positive_rate(&self) -> f64 {
        ratio(self.false_positives, self.false_positives + self.true_negatives)
    }

    /// Harmonic mean of precision and recall, 0 when both are 0.
    pub fn f1(&self) -> f64 {
        let (precision, recall) = (self.precision(), self.recall());
        if precision + recall == 0.0 {
            0.0
        } else {
            2.0 * precision * recall / (precision + recall)
        }
    }
}

/// Summary of a binary classification run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ClassificationMetrics {
    pub confusion_matrix: ConfusionMatrix,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub specificity: f64,
    pub f1_score: f64,
}

impl From<ConfusionMatrix> for ClassificationMetrics {
    fn from(cm: ConfusionMatrix) -> Self {
        Self {
            confusion_matrix: cm,
            accuracy: cm.accuracy(),
            precision: cm.precision(),
            recall: cm.recall(),
            specificity: cm.specificity(),
            f1_score: cm.f1(),
        }
    }
}

/// Confusion matrix, accuracy, precision, recall, specificity and F1 for
/// `y_pred` against `y_true`, treating `positive_label` as the positive class.
///
/// Every ratio is 0 when its denominator is 0.
///
/// # Example
///
/// ```
/// use binary_metrics::evaluate_classification_metrics;
///
/// let m = evaluate_classification_metrics(&[1, 1, 0, 0], &[1, 0, 0, 0], &1).unwrap();
/// assert_eq!(m.confusion_matrix.as_array(), [2, 0, 1, 1]);
/// assert_eq!(m.accuracy, 0.75);
/// ```
pub fn evaluate_classification_metrics<L: PartialEq>(
    y_true: &[L],
    y_pred: &[L],
    positive_label: &L,
) -> Result<ClassificationMetrics, MetricsError> {
    let cm = ConfusionMatrix::from_labels(y_true, y_pred, positive_label)?;
    let metrics = ClassificationMetrics::from(cm);
    debug!(
        confusion = ?cm.as_array(),
        accuracy = metrics.accuracy,
        f1 = metrics.f1_score,
        "evaluated classification metrics"
    );
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn binarize_marks_only_the_positive_label() {
        assert_eq!(binarize(&["cat", "dog", "cat", "eel"], &"cat"), vec![1, 0, 1, 0]);
    }

    #[test]
    fn reference_scenario() {
        let m = evaluate_classification_metrics(&[1, 1, 0, 0], &[1, 0, 0, 0], &1).unwrap();
        assert_eq!(m.confusion_matrix.as_array(), [2, 0, 1, 1]);
        assert_abs_diff_eq!(m.accuracy, 0.75);
        assert_abs_diff_eq!(m.precision, 1.0);
        assert_abs_diff_eq!(m.recall, 0.5);
        assert_abs_diff_eq!(m.specificity, 1.0);
        assert_abs_diff_eq!(m.f1_score, 2.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_denominators_give_zero() {
        // No positive predictions and no positive truths.
        let m = evaluate_classification_metrics(&[0, 0], &[0, 0], &1).unwrap();
        assert_eq!(m.precision, 0.0);
        assert_eq!(m.recall, 0.0);
        assert_eq!(m.f1_score, 0.0);
        assert_eq!(m.specificity, 1.0);

        let empty: [u8; 0] = [];
        let m = evaluate_classification_metrics(&empty, &empty, &1).unwrap();
        assert_eq!(m.accuracy, 0.0);
        assert_eq!(m.specificity, 0.0);
    }

    #[test]
    fn non_positive_labels_all_count_as_negative() {
        let m = evaluate_classification_metrics(&["a", "b", "c"], &["c", "b", "a"], &"a").unwrap();
        // b/b is TN, c predicted for a is FN, a predicted for c is FP.
        assert_eq!(m.confusion_matrix.as_array(), [1, 1, 1, 0]);
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            evaluate_classification_metrics(&[1, 0], &[1], &1),
            Err(MetricsError::LengthMismatch {
                truth: 2,
                predicted: 1
            })
        );
    }

    #[test]
    fn false_positive_rate_complements_specificity() {
        let cm = ConfusionMatrix {
            true_negatives: 3,
            false_positives: 1,
            false_negatives: 0,
            true_positives: 2,
        };
        assert_abs_diff_eq!(cm.false_positive_rate() + cm.specificity(), 1.0);
        assert_eq!(cm.total(), 6);
    }
}
