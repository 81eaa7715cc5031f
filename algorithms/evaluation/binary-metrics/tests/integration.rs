//! Cross-module checks on realistic inputs.

use approx::assert_abs_diff_eq;
use binary_metrics::{
    DEFAULT_N_BINS, calibration_curve, evaluate_classification_metrics, probability_histograms,
    roc_curve,
};
use proptest::prelude::*;

fn labelled_probs() -> impl Strategy<Value = (Vec<bool>, Vec<f64>)> {
    (0_usize..40).prop_flat_map(|n| {
        (
            prop::collection::vec(any::<bool>(), n),
            prop::collection::vec(0.0..=1.0_f64, n),
        )
    })
}

proptest! {
    #[test]
    fn ratios_stay_in_unit_interval(
        pairs in prop::collection::vec((0_u8..3, 0_u8..3), 0..50),
        positive in 0_u8..3,
    ) {
        let (y_true, y_pred): (Vec<u8>, Vec<u8>) = pairs.into_iter().unzip();
        let m = evaluate_classification_metrics(&y_true, &y_pred, &positive).unwrap();
        for v in [m.accuracy, m.precision, m.recall, m.specificity, m.f1_score] {
            prop_assert!((0.0..=1.0).contains(&v));
        }
        prop_assert_eq!(m.confusion_matrix.total(), y_true.len());
    }

    #[test]
    fn roc_starts_at_the_top_right_when_both_classes_exist((truth, probs) in labelled_probs()) {
        let roc = roc_curve(&truth, &probs, &true).unwrap();
        let has_pos = truth.iter().any(|&t| t);
        let has_neg = truth.iter().any(|&t| !t);
        prop_assert_eq!(roc.tpr[0], if has_pos { 1.0 } else { 0.0 });
        prop_assert_eq!(roc.fpr[0], if has_neg { 1.0 } else { 0.0 });
        for w in roc.tpr.windows(2) {
            prop_assert!(w[0] >= w[1]);
        }
    }

    #[test]
    fn calibration_accounts_for_every_sample_below_one((truth, probs) in labelled_probs()) {
        let curve = calibration_curve(&truth, &probs, &true, DEFAULT_N_BINS).unwrap();
        let below_one = probs.iter().filter(|&&p| p < 1.0).count();
        prop_assert_eq!(curve.bin_counts.iter().sum::<usize>(), below_one);
        for (&n, &p) in curve.bin_counts.iter().zip(&curve.true_proportions) {
            prop_assert_eq!(n == 0, p.is_nan());
        }
    }

    #[test]
    fn histograms_partition_the_input((truth, probs) in labelled_probs()) {
        let h = probability_histograms(&truth, &probs, &true, DEFAULT_N_BINS).unwrap();
        prop_assert_eq!(h.positive.len() + h.negative.len(), probs.len());
        prop_assert_eq!(h.positive_counts.counts.iter().sum::<usize>(), h.positive.len());
    }
}

#[test]
fn string_labels_end_to_end() {
    let y_true = ["spam", "ham", "spam", "ham", "ham"];
    let y_pred = ["spam", "spam", "ham", "ham", "ham"];
    let m = evaluate_classification_metrics(&y_true, &y_pred, &"spam").unwrap();
    assert_eq!(m.confusion_matrix.as_array(), [2, 1, 1, 1]);
    assert_abs_diff_eq!(m.precision, 0.5);
    assert_abs_diff_eq!(m.recall, 0.5);
    assert_abs_diff_eq!(m.f1_score, 0.5);
    assert_abs_diff_eq!(m.specificity, 2.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn perfectly_separated_scores() {
    let y_true = [0, 0, 0, 1, 1, 1];
    let y_probs = [0.0, 0.2, 0.4, 0.6, 0.8, 0.95];
    let roc = roc_curve(&y_true, &y_probs, &1).unwrap();
    // Threshold 0.5 separates the classes exactly.
    assert_eq!((roc.tpr[5], roc.fpr[5]), (1.0, 0.0));
    assert_eq!((roc.tpr[10], roc.fpr[10]), (0.0, 0.0));

    let curve = calibration_curve(&y_true, &y_probs, &1, 5).unwrap();
    assert_eq!(curve.true_proportions[0], 0.0);
    assert_eq!(curve.true_proportions[4], 1.0);
}
