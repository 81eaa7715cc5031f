//! Brute-force k-Nearest Neighbors classification.
//!
//! A query is labelled by majority vote among the `k` training rows closest
//! to it under a Minkowski distance of order `p`. Probabilities are the
//! share of each class among those neighbors.
//!
//! ```text
//! predict() / predict_proba()
//!   ├─ distances to every training row   (knn_helpers::Minkowski)
//!   ├─ stable ascending rank, keep k     (select.rs)
//!   ├─ count class codes                 (select.rs, labels.rs)
//!   └─ majority code / count ÷ voters
//! ```
//!
//! Tie rules are deterministic: equal distances favour the lower training
//! index, equal vote counts favour the smaller label.

pub mod config;
pub mod error;
pub mod labels;
pub mod model;

pub(crate) mod select;

pub use config::{DEFAULT_K, DEFAULT_P, KnnConfig};
pub use error::KnnError;
pub use labels::LabelEncoder;
pub use model::KnnClassifier;
