// Fits a k-NN model on two synthetic clouds and logs every evaluation the
// library offers for it.
mod logging;

use std::error::Error;

use knn_eval::datasets::two_blobs;
use knn_eval::metrics::contour_levels;
use knn_eval::{
    DEFAULT_N_BINS, KnnClassifier, KnnConfig, MeshGrid, Outcome, calibration_curve,
    classification_outcomes, evaluate_classification_metrics, probability_histograms, roc_curve,
};
use tracing::info;

const POSITIVE: u8 = 1;

fn main() -> Result<(), Box<dyn Error>> {
    logging::init(logging::verbosity_from_env());

    let data = two_blobs(150, 1.6, 7);
    let (train, test) = data.split(0.7);

    let mut model = KnnClassifier::new();
    model.fit_with_config(
        train.features.clone(),
        train.labels.clone(),
        &KnnConfig::new(),
    )?;
    info!(%model, n_train = train.len(), n_test = test.len(), "fitted");

    let preds = model.predict(test.features.view())?;
    let probs = model.predict_proba(test.features.view())?;
    let column = model
        .classes()?
        .iter()
        .position(|&c| c == POSITIVE)
        .ok_or("positive class missing from the training labels")?;
    let positive_probs = probs.column(column).to_vec();

    let metrics = evaluate_classification_metrics(&test.labels, &preds, &POSITIVE)?;
    info!(
        confusion = ?metrics.confusion_matrix.as_array(),
        accuracy = metrics.accuracy,
        precision = metrics.precision,
        recall = metrics.recall,
        specificity = metrics.specificity,
        f1 = metrics.f1_score,
        "classification metrics"
    );

    let outcomes = classification_outcomes(&test.labels, &preds, &POSITIVE)?;
    let count = |o: Outcome| outcomes.iter().filter(|&&x| x == o).count();
    info!(
        tp = count(Outcome::TruePositive),
        fp = count(Outcome::FalsePositive),
        fn_ = count(Outcome::FalseNegative),
        tn = count(Outcome::TrueNegative),
        "per-sample outcomes"
    );

    let calibration = calibration_curve(&test.labels, &positive_probs, &POSITIVE, DEFAULT_N_BINS)?;
    for (center, proportion) in calibration.populated() {
        info!(center, proportion, "calibration bin");
    }

    let histograms =
        probability_histograms(&test.labels, &positive_probs, &POSITIVE, DEFAULT_N_BINS)?;
    info!(
        positive = ?histograms.positive_counts.counts,
        negative = ?histograms.negative_counts.counts,
        "probability histograms"
    );

    let roc = roc_curve(&test.labels, &positive_probs, &POSITIVE)?;
    for (threshold, (fpr, tpr)) in roc.thresholds.iter().zip(roc.points()) {
        info!(threshold, fpr, tpr, "roc point");
    }

    let grid = MeshGrid::around(train.features.view(), 25)?;
    let grid_probs = model.predict_proba(grid.points().view())?;
    let surface = grid.probability_surface(grid_probs.view(), column)?;
    info!(
        resolution = grid.resolution(),
        mean_probability = surface.mean().unwrap_or(f64::NAN),
        levels = ?contour_levels(),
        "probability surface"
    );

    Ok(())
}
