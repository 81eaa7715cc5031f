//! Receiver operating characteristic over a fixed threshold grid.

use tracing::debug;

use crate::bins::linspace;
use crate::confusion::{ConfusionMatrix, binarize};
use crate::error::{MetricsError, check_parallel};

/// Number of thresholds evaluated: 0.0, 0.1, …, 1.0.
pub const ROC_THRESHOLDS: usize = 11;

/// True and false positive rates at each threshold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct RocCurve {
    pub thresholds: Vec<f64>,
    pub fpr: Vec<f64>,
    pub tpr: Vec<f64>,
}

impl RocCurve {
    /// `(fpr, tpr)` pairs in threshold order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.fpr.iter().copied().zip(self.tpr.iter().copied())
    }
}

/// Evaluates TPR and FPR at thresholds 0.0, 0.1, …, 1.0.
///
/// A sample is predicted positive when its probability is `>=` the
/// threshold. Either rate is 0 when its denominator is 0, e.g. the TPR of
/// a set without positives.
///
/// # Errors
///
/// [`MetricsError::LengthMismatch`] if `y_true` and `y_probs` differ in length.
pub fn roc_curve<L: PartialEq>(
    y_true: &[L],
    y_probs: &[f64],
    positive_label: &L,
) -> Result<RocCurve, MetricsError> {
    check_parallel(y_true.len(), y_probs.len())?;
    let truth = binarize(y_true, positive_label);
    let thresholds = linspace(0.0, 1.0, ROC_THRESHOLDS).to_vec();

    let mut fpr = Vec::with_capacity(thresholds.len());
    let mut tpr = Vec::with_capacity(thresholds.len());
    for &threshold in &thresholds {
        let predicted: Vec<u8> = y_probs
            .iter()
            .map(|&p| u8::from(p >= threshold))
            .collect();
        let cm = ConfusionMatrix::from_binary(&truth, &predicted)?;
        tpr.push(cm.recall());
        fpr.push(cm.false_positive_rate());
    }

    debug!(n_samples = y_probs.len(), "computed ROC curve");
    Ok(RocCurve {
        thresholds,
        fpr,
        tpr,
    })
}
