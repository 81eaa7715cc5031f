//! End-to-end behaviour of fit / predict / predict_proba.

use approx::assert_abs_diff_eq;
use k_nn::{KnnClassifier, KnnError};
use ndarray::{Array2, array};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Species {
    Setosa,
    Versicolor,
    Virginica,
}

fn line() -> (Array2<f64>, Vec<u32>) {
    (array![[0.0], [1.0], [2.0], [10.0]], vec![0, 0, 0, 1])
}

#[test]
fn three_nearest_vote_for_the_cluster() {
    let (x, y) = line();
    let mut model = KnnClassifier::new();
    model.fit(x, y, 3, 2).unwrap();
    assert_eq!(model.predict(array![[0.5]].view()).unwrap(), vec![0]);
}

#[test]
fn training_rows_predict_their_own_label_with_k1() {
    let x = array![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [5.0, 5.0], [6.0, 5.0]];
    let y = vec![2, 0, 1, 1, 2];
    let mut model = KnnClassifier::new();
    model.fit(x.clone(), y.clone(), 1, 3).unwrap();
    assert_eq!(model.predict(x.view()).unwrap(), y);
}

#[test]
fn enum_labels_keep_declaration_order_for_columns() {
    let x = array![[0.0], [0.2], [5.0], [5.2], [9.0]];
    let y = vec![
        Species::Virginica,
        Species::Virginica,
        Species::Setosa,
        Species::Versicolor,
        Species::Setosa,
    ];
    let mut model = KnnClassifier::new();
    model.fit(x, y, 2, 2).unwrap();

    assert_eq!(
        model.classes().unwrap(),
        &[Species::Setosa, Species::Versicolor, Species::Virginica]
    );
    // Neighbors of 5.1 are Setosa (5.0) and Versicolor (5.2): a tie.
    assert_eq!(model.predict(array![[5.1]].view()).unwrap(), vec![Species::Setosa]);

    let probs = model.predict_proba(array![[5.1], [0.1]].view()).unwrap();
    assert_abs_diff_eq!(probs.row(0).to_owned(), array![0.5, 0.5, 0.0]);
    assert_abs_diff_eq!(probs.row(1).to_owned(), array![0.0, 0.0, 1.0]);
}

#[test]
fn classes_missing_from_the_neighborhood_get_zero() {
    let x = array![[0.0], [1.0], [100.0]];
    let y = vec![0, 1, 2];
    let mut model = KnnClassifier::new();
    model.fit(x, y, 2, 1).unwrap();
    let probs = model.predict_proba(array![[0.4]].view()).unwrap();
    assert_eq!(probs.ncols(), 3);
    assert_abs_diff_eq!(probs[[0, 2]], 0.0);
}

#[test]
fn unfitted_model_reports_not_fitted() {
    let model: KnnClassifier<u32, f64> = KnnClassifier::default();
    let err = model.predict(array![[0.0]].view()).unwrap_err();
    assert!(matches!(err, KnnError::NotFitted { .. }));
    assert!(!err.is_invalid_argument());
}

#[test]
fn fit_argument_errors_are_invalid_arguments() {
    let mut model: KnnClassifier<u32, f64> = KnnClassifier::new();
    for err in [
        model.fit(array![[0.0], [1.0]], vec![0], 1, 2).unwrap_err(),
        model.fit(array![[0.0]], vec![0], 0, 2).unwrap_err(),
        model.fit(array![[0.0]], vec![0], 1, 0).unwrap_err(),
    ] {
        assert!(err.is_invalid_argument(), "{err}");
    }
}

#[test]
fn concurrent_predictions_agree() {
    let (x, y) = line();
    let mut model = KnnClassifier::new();
    model.fit(x, y, 3, 2).unwrap();
    let queries = array![[0.5], [9.5], [4.0], [6.5]];
    let expected = model.predict(queries.view()).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| model.predict(queries.view()).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
