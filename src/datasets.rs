//! Seeded synthetic datasets.

use ndarray::{Array2, Axis};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Feature matrix with a parallel label vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub features: Array2<f64>,
    pub labels: Vec<u8>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Splits off the first `train_fraction` of the rows as a training set.
    /// Row order is kept, so shuffle first if the rows are grouped.
    pub fn split(&self, train_fraction: f64) -> (Dataset, Dataset) {
        let cut = ((self.len() as f64) * train_fraction.clamp(0.0, 1.0)).round() as usize;
        let (head, tail) = self.features.view().split_at(Axis(0), cut);
        (
            Dataset {
                features: head.to_owned(),
                labels: self.labels[..cut].to_vec(),
            },
            Dataset {
                features: tail.to_owned(),
                labels: self.labels[cut..].to_vec(),
            },
        )
    }
}

/// Two square clouds of `n_per_class` points each: label 0 around the
/// origin, label 1 around `(2.5, 2.5)`. Every coordinate is offset by a
/// uniform draw from `[-spread, spread)`. Rows are shuffled.
pub fn two_blobs(n_per_class: usize, spread: f64, seed: u64) -> Dataset {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let centers = [(0_u8, 0.0), (1_u8, 2.5)];

    let mut rows: Vec<([f64; 2], u8)> = centers
        .iter()
        .flat_map(|&(label, c)| std::iter::repeat_n((label, c), n_per_class))
        .map(|(label, c)| {
            let mut jitter = || {
                if spread > 0.0 {
                    rng.random_range(-spread..spread)
                } else {
                    0.0
                }
            };
            ([c + jitter(), c + jitter()], label)
        })
        .collect();
    rows.shuffle(&mut rng);

    let features = Array2::from_shape_fn((rows.len(), 2), |(i, j)| rows[i].0[j]);
    let labels = rows.iter().map(|&(_, label)| label).collect();
    Dataset { features, labels }
}
