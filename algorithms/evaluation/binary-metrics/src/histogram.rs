//! Predicted-probability distributions split by true class.

use tracing::debug;

use crate::bins::unit_edges;
use crate::confusion::binarize;
use crate::error::{MetricsError, check_bins, check_parallel};

/// Counts of values over fixed edges.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct Histogram {
    /// `counts.len() + 1` ascending edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bins are half-open `[lo, hi)` except the last, which also takes its
    /// upper edge. Values outside the edges and NaN are not counted.
    fn over(values: &[f64], edges: Vec<f64>) -> Self {
        let n_bins = edges.len().saturating_sub(1);
        let mut counts = vec![0; n_bins];
        if n_bins == 0 {
            return Self { edges, counts };
        }
        if let (Some(&lo), Some(&hi)) = (edges.first(), edges.last()) {
            for &v in values.iter().filter(|v| (lo..=hi).contains(*v)) {
                let bin = edges[1..].partition_point(|&edge| edge <= v);
                counts[bin.min(n_bins - 1)] += 1;
            }
        }
        Self { edges, counts }
    }
}

/// Predicted probabilities of each true class, ready to be drawn as two
/// overlaid histograms.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct ProbabilityHistograms {
    /// Probabilities of samples whose true label is the positive one, in input order.
    pub positive: Vec<f64>,
    /// Probabilities of every other sample, in input order.
    pub negative: Vec<f64>,
    pub positive_counts: Histogram,
    pub negative_counts: Histogram,
}

/// Separates `y_probs` by the binary-mapped truth and bins each side into
/// `n_bins` equal-width bins over `[0, 1]`.
///
/// The edges are fixed rather than taken from the data's own min/max, so
/// counts from different models or splits line up bin for bin.
///
/// # Errors
///
/// [`MetricsError::LengthMismatch`] or [`MetricsError::InvalidBins`].
pub fn probability_histograms<L: PartialEq>(
    y_true: &[L],
    y_probs: &[f64],
    positive_label: &L,
    n_bins: usize,
) -> Result<ProbabilityHistograms, MetricsError> {
    check_parallel(y_true.len(), y_probs.len())?;
    check_bins(n_bins)?;

    let (positive, negative): (Vec<(f64, u8)>, Vec<(f64, u8)>) = y_probs
        .iter()
        .copied()
        .zip(binarize(y_true, positive_label))
        .partition(|&(_, t)| t == 1);
    let positive: Vec<f64> = positive.into_iter().map(|(p, _)| p).collect();
    let negative: Vec<f64> = negative.into_iter().map(|(p, _)| p).collect();

    let edges = unit_edges(n_bins).to_vec();
    debug!(
        n_positive = positive.len(),
        n_negative = negative.len(),
        "split probabilities by class"
    );
    Ok(ProbabilityHistograms {
        positive_counts: Histogram::over(&positive, edges.clone()),
        negative_counts: Histogram::over(&negative, edges),
        positive,
        negative,
    })
}
