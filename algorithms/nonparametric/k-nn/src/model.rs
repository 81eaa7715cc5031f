use std::fmt::{Debug, Display, Formatter};

use ndarray::{Array2, ArrayView1, ArrayView2};
use tracing::{debug, trace, warn};

use knn_helpers::{Distance, Float, Minkowski};

use crate::config::KnnConfig;
use crate::error::KnnError;
use crate::labels::LabelEncoder;
use crate::select::{k_nearest, majority, tally};

/// Training data and hyperparameters captured by [`KnnClassifier::fit`].
#[derive(Debug, Clone)]
struct Fitted<L, F> {
    config: KnnConfig,
    metric: Minkowski,
    features: Array2<F>,
    labels: Vec<L>,
    codes: Vec<usize>,
    encoder: LabelEncoder<L>,
}

impl<L, F> Fitted<L, F>
where
    L: Clone + Ord + Debug,
    F: Float,
{
    fn check_width(&self, found: usize) -> Result<(), KnnError> {
        let expected = self.features.ncols();
        if found != expected {
            return Err(KnnError::DimensionMismatch { expected, found });
        }
        Ok(())
    }

    /// Distance from `query` to every training row, in training order.
    fn distances(&self, query: ArrayView1<F>) -> Vec<F> {
        self.features
            .rows()
            .into_iter()
            .map(|row| self.metric.distance(query, row))
            .collect()
    }

    fn neighbors(&self, query: ArrayView1<F>) -> Vec<usize> {
        k_nearest(&self.distances(query), self.config.k())
    }

    /// Vote counts per class code and the number of voters.
    fn votes(&self, query: ArrayView1<F>) -> (Vec<usize>, usize) {
        let neighbors = self.neighbors(query);
        trace!(?neighbors, "selected neighbors");
        (
            tally(&neighbors, &self.codes, self.encoder.len()),
            neighbors.len(),
        )
    }
}

/// A brute-force k-Nearest Neighbors classifier.
///
/// The model starts unfitted. [`fit`](Self::fit) stores the training set
/// and hyperparameters, after which [`predict`](Self::predict) and
/// [`predict_proba`](Self::predict_proba) only read that state, so a fitted
/// model can be shared across threads and queried concurrently.
///
/// # Type Parameters
///
/// * `L`: The label type. Any totally ordered type works (integers,
///   `String`, `&str`, a custom `enum`). Labels are mapped to contiguous
///   codes in ascending order at fit time, and that order decides both the
///   column order of probabilities and majority-vote ties.
/// * `F`: The float type for the features (`f32` or `f64`).
///
/// # Example
///
/// ```
/// use k_nn::KnnClassifier;
/// use ndarray::array;
///
/// let mut model = KnnClassifier::new();
/// model
///     .fit(array![[0.0], [1.0], [2.0], [10.0]], vec![0, 0, 0, 1], 3, 2)
///     .unwrap();
/// assert_eq!(model.predict(array![[0.5]].view()).unwrap(), vec![0]);
/// ```
#[derive(Debug, Clone)]
pub struct KnnClassifier<L, F>
where
    L: Clone + Ord + Debug,
    F: Float,
{
    state: Option<Fitted<L, F>>,
}

impl<L, F> KnnClassifier<L, F>
where
    L: Clone + Ord + Debug,
    F: Float,
{
    /// Creates an unfitted classifier.
    pub fn new() -> Self {
        Self { state: None }
    }

    /// Fits the model on `features` (one row per sample) and `labels`.
    ///
    /// The model takes ownership of the training data. Calling `fit` again
    /// replaces the previous state entirely. Nothing is stored when
    /// validation fails.
    ///
    /// # Errors
    ///
    /// * [`KnnError::LengthMismatch`] if the row count differs from the label count.
    /// * [`KnnError::InvalidK`] / [`KnnError::InvalidP`] if `k` or `p` is zero.
    /// * [`KnnError::EmptyTrainingSet`] if there are no rows.
    pub fn fit(
        &mut self,
        features: Array2<F>,
        labels: Vec<L>,
        k: usize,
        p: usize,
    ) -> Result<(), KnnError> {
        let config = KnnConfig::new().with_k(k).with_p(p);
        self.fit_with_config(features, labels, &config)
    }

    /// Same as [`fit`](Self::fit), with the hyperparameters taken from `config`.
    #[tracing::instrument(skip_all, fields(k = config.k(), p = config.p()))]
    pub fn fit_with_config(
        &mut self,
        features: Array2<F>,
        labels: Vec<L>,
        config: &KnnConfig,
    ) -> Result<(), KnnError> {
        if features.nrows() != labels.len() {
            return Err(KnnError::LengthMismatch {
                features: features.nrows(),
                labels: labels.len(),
            });
        }
        config.validate()?;
        if labels.is_empty() {
            return Err(KnnError::EmptyTrainingSet);
        }
        let metric = Minkowski::new(config.p())?;

        let (encoder, codes) = LabelEncoder::fit_transform(&labels);

        if config.k() > labels.len() {
            warn!(
                k = config.k(),
                n_samples = labels.len(),
                "k exceeds the training set size; every sample will vote"
            );
        }
        debug!(
            n_samples = features.nrows(),
            n_features = features.ncols(),
            n_classes = encoder.len(),
            "fitted kNN model"
        );

        self.state = Some(Fitted {
            config: *config,
            metric,
            features,
            labels,
            codes,
            encoder,
        });
        Ok(())
    }

    fn fitted(&self, operation: &'static str) -> Result<&Fitted<L, F>, KnnError> {
        self.state.as_ref().ok_or(KnnError::NotFitted { operation })
    }

    /// Predicts one label per row of `queries`, in row order.
    ///
    /// Each row gets the most common label among its `k` nearest training
    /// rows. When several labels share the highest count the smallest one
    /// wins.
    ///
    /// # Errors
    ///
    /// [`KnnError::NotFitted`] before `fit`, [`KnnError::DimensionMismatch`]
    /// if the query width differs from the training width.
    #[tracing::instrument(skip_all, fields(n_queries = queries.nrows()))]
    pub fn predict(&self, queries: ArrayView2<F>) -> Result<Vec<L>, KnnError> {
        let fitted = self.fitted("predict")?;
        fitted.check_width(queries.ncols())?;

        Ok(queries
            .rows()
            .into_iter()
            .map(|query| {
                let (counts, _) = fitted.votes(query);
                fitted.encoder.classes()[majority(&counts)].clone()
            })
            .collect())
    }

    /// Class membership probabilities, one row per query.
    ///
    /// Column `c` is the share of the selected neighbors whose label is
    /// `classes()[c]`. Classes absent from the neighborhood get zero. The
    /// denominator is the number of neighbors actually selected, which is
    /// `k` unless the training set is smaller.
    ///
    /// # Errors
    ///
    /// Same as [`predict`](Self::predict).
    #[tracing::instrument(skip_all, fields(n_queries = queries.nrows()))]
    pub fn predict_proba(&self, queries: ArrayView2<F>) -> Result<Array2<F>, KnnError> {
        let fitted = self.fitted("predict_proba")?;
        fitted.check_width(queries.ncols())?;

        let mut probs = Array2::zeros((queries.nrows(), fitted.encoder.len()));
        for (query, mut row) in queries.rows().into_iter().zip(probs.rows_mut()) {
            let (counts, n_neighbors) = fitted.votes(query);
            let denom = F::from_count(n_neighbors);
            for (p, &count) in row.iter_mut().zip(&counts) {
                *p = F::from_count(count) / denom;
            }
        }
        Ok(probs)
    }

    /// Training row indices of the neighbors of a single query, nearest
    /// first, ties resolved towards the lower index.
    pub fn kneighbors(&self, query: ArrayView1<F>) -> Result<Vec<usize>, KnnError> {
        let fitted = self.fitted("kneighbors")?;
        fitted.check_width(query.len())?;
        Ok(fitted.neighbors(query))
    }

    /// Classes seen at fit time, ascending. This is the column order of
    /// [`predict_proba`](Self::predict_proba).
    pub fn classes(&self) -> Result<&[L], KnnError> {
        Ok(self.fitted("classes")?.encoder.classes())
    }

    /// The labels passed to `fit`, in their original order.
    pub fn training_labels(&self) -> Result<&[L], KnnError> {
        Ok(&self.fitted("training_labels")?.labels)
    }

    pub fn is_fitted(&self) -> bool {
        self.state.is_some()
    }

    pub fn k(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.config.k())
    }

    pub fn p(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.config.p())
    }

    pub fn n_features(&self) -> Option<usize> {
        self.state.as_ref().map(|s| s.features.ncols())
    }
}

impl<L, F> Default for KnnClassifier<L, F>
where
    L: Clone + Ord + Debug,
    F: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<L, F> Display for KnnClassifier<L, F>
where
    L: Clone + Ord + Debug,
    F: Float,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            Some(s) => write!(f, "kNN model (k={}, p={})", s.config.k(), s.config.p()),
            None => write!(f, "kNN model (unfitted)"),
        }
    }
}
