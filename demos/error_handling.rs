//! Example demonstrating error handling with the k-NN classifier and the
//! evaluation helpers.
//!
//! Every failure is a `Result` the caller can match on or propagate with `?`.

use knn_eval::{KnnClassifier, KnnError, MetricsError, evaluate_classification_metrics};
use ndarray::array;

fn main() {
    println!("k-NN Classifier Error Handling Examples");
    println!("=======================================");

    // Example 1: invalid hyperparameters
    println!("\n1. Handling invalid k value (k=0):");
    let mut classifier = KnnClassifier::new();
    match classifier.fit(array![[1.0, 1.0], [2.0, 2.0]], vec!["A", "A"], 0, 2) {
        Ok(()) => println!("   Classifier fitted"),
        Err(e @ KnnError::InvalidK { .. }) => println!("   ✓ Caught expected error: {e}"),
        Err(e) => println!("   ✗ Unexpected error: {e}"),
    }

    // Example 2: mismatched training data
    println!("\n2. Handling features/labels of different lengths:");
    match classifier.fit(array![[1.0, 1.0], [2.0, 2.0]], vec!["A"], 1, 2) {
        Err(e) if e.is_invalid_argument() => println!("   ✓ Caught expected error: {e}"),
        other => println!("   ✗ Unexpected result: {other:?}"),
    }

    // Example 3: predicting before a successful fit
    println!("\n3. Predicting with an unfitted model:");
    match classifier.predict(array![[1.0, 1.0]].view()) {
        Err(e @ KnnError::NotFitted { .. }) => println!("   ✓ Caught expected error: {e}"),
        other => println!("   ✗ Unexpected result: {other:?}"),
    }

    // Example 4: a successful round trip
    println!("\n4. Successful prediction with error handling:");
    let features = array![
        [1.0, 1.0],
        [2.0, 2.0],
        [1.0, 2.0],
        [8.0, 8.0],
        [9.0, 8.0],
        [8.0, 9.0]
    ];
    let labels = vec!["Class A", "Class A", "Class A", "Class B", "Class B", "Class B"];
    match classifier.fit(features, labels, 3, 2) {
        Ok(()) => {
            println!("   ✓ {classifier}");
            let queries = array![[2.5, 2.5], [7.5, 8.5]];
            match classifier.predict(queries.view()) {
                Ok(predicted) => println!("   ✓ Predictions: {predicted:?}"),
                Err(e) => println!("   ✗ Prediction failed: {e}"),
            }
            // The model was fitted on two features.
            if let Err(e) = classifier.predict(array![[1.0]].view()) {
                println!("   ✓ Caught expected error: {e}");
            }
        }
        Err(e) => println!("   ✗ Failed to fit classifier: {e}"),
    }

    // Example 5: propagation with `?`
    println!("\n5. Error propagation in functions:");

    fn classify_with_error_handling() -> Result<String, KnnError> {
        let mut classifier = KnnClassifier::new();
        classifier.fit(array![[1.0], [-1.0]], vec!["positive", "negative"], 1, 2)?;
        let result = classifier.predict(array![[0.5]].view())?;
        Ok(result[0].to_string())
    }

    match classify_with_error_handling() {
        Ok(result) => println!("   ✓ Classification result: {result}"),
        Err(e) => println!("   ✗ Classification failed: {e}"),
    }

    // Example 6: metrics reject non-parallel inputs, never zero denominators
    println!("\n6. Metric errors:");
    match evaluate_classification_metrics(&[1, 0, 1], &[1, 0], &1) {
        Err(e @ MetricsError::LengthMismatch { .. }) => println!("   ✓ Caught expected error: {e}"),
        other => println!("   ✗ Unexpected result: {other:?}"),
    }
    if let Ok(m) = evaluate_classification_metrics(&[0, 0], &[0, 0], &1) {
        println!("   ✓ Precision with no positive predictions: {}", m.precision);
    }

    println!("\nAll examples completed successfully!");
}
