//! Reliability (calibration) curve over equal-width probability bins.

use tracing::{debug, warn};

use crate::bins::{centers, unit_edges};
use crate::confusion::binarize;
use crate::error::{MetricsError, check_bins, check_parallel};

/// Observed frequency of the positive class per predicted-probability bin.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct CalibrationCurve {
    /// Midpoint of each bin.
    pub bin_centers: Vec<f64>,
    /// Mean of the 0/1 truth in each bin; NaN for an empty bin.
    pub true_proportions: Vec<f64>,
    /// Number of probabilities assigned to each bin.
    pub bin_counts: Vec<usize>,
}

impl CalibrationCurve {
    /// Bins that received at least one probability, as `(center, proportion)`.
    pub fn populated(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.bin_centers
            .iter()
            .zip(&self.true_proportions)
            .zip(&self.bin_counts)
            .filter(|(_, count)| **count > 0)
            .map(|((&c, &p), _)| (c, p))
    }
}

/// Index of the first bin whose upper edge exceeds `prob`.
///
/// `None` for values at or above the last edge (including exactly 1.0) and
/// for NaN. Values below 0 land in the first bin.
fn bin_of(prob: f64, upper_edges: &[f64]) -> Option<usize> {
    upper_edges.iter().position(|&edge| prob < edge)
}

/// Splits `[0, 1]` into `n_bins` equal bins and reports, for each, the share
/// of positives among the samples whose predicted probability falls in it.
///
/// A probability belongs to the first bin whose upper edge is strictly
/// greater than it. A probability of exactly 1.0 therefore belongs to no
/// bin and is left out; the number of such samples is logged. Empty bins
/// report NaN, never 0.
///
/// # Errors
///
/// [`MetricsError::LengthMismatch`] if `y_true` and `y_probs` differ in
/// length, [`MetricsError::InvalidBins`] if `n_bins` is 0.
pub fn calibration_curve<L: PartialEq>(
    y_true: &[L],
    y_probs: &[f64],
    positive_label: &L,
    n_bins: usize,
) -> Result<CalibrationCurve, MetricsError> {
    check_parallel(y_true.len(), y_probs.len())?;
    check_bins(n_bins)?;

    let truth = binarize(y_true, positive_label);
    let edges = unit_edges(n_bins);
    let upper = edges.slice(ndarray::s![1..]).to_vec();

    let mut positives = vec![0_usize; n_bins];
    let mut bin_counts = vec![0_usize; n_bins];
    let mut dropped = 0_usize;
    for (&prob, &t) in y_probs.iter().zip(&truth) {
        match bin_of(prob, &upper) {
            Some(b) => {
                bin_counts[b] += 1;
                positives[b] += usize::from(t);
            }
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        warn!(dropped, "probabilities at or above 1.0 fall outside every bin");
    }

    let true_proportions = positives
        .iter()
        .zip(&bin_counts)
        .map(|(&pos, &n)| {
            if n == 0 {
                f64::NAN
            } else {
                pos as f64 / n as f64
            }
        })
        .collect();

    debug!(n_bins, n_samples = y_probs.len(), "computed calibration curve");
    Ok(CalibrationCurve {
        bin_centers: centers(&edges),
        true_proportions,
        bin_counts,
    })
}
