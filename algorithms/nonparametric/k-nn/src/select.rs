//! Neighbor ranking and vote aggregation.

use std::cmp::Ordering;

use knn_helpers::Float;

/// Orders distances ascending with NaN after every number.
fn compare_distances<F: Float>(a: F, b: F) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Indices of the `k` smallest distances, nearest first.
///
/// The sort is stable, so equal distances keep their original index order
/// and the lower training index wins. Returns every index when `k`
/// exceeds the number of distances.
pub(crate) fn k_nearest<F: Float>(distances: &[F], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..distances.len()).collect();
    order.sort_by(|&a, &b| compare_distances(distances[a], distances[b]));
    order.truncate(k);
    order
}

/// Per-class vote counts for the given neighbor indices.
pub(crate) fn tally(neighbors: &[usize], codes: &[usize], n_classes: usize) -> Vec<usize> {
    let mut counts = vec![0; n_classes];
    for &i in neighbors {
        counts[codes[i]] += 1;
    }
    counts
}

/// Code with the highest count; the smallest code wins a tie.
pub(crate) fn majority(counts: &[usize]) -> usize {
    counts
        .iter()
        .enumerate()
        .fold((0, 0), |best, (code, &n)| if n > best.1 { (code, n) } else { best })
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_first() {
        assert_eq!(k_nearest(&[9.0, 1.0, 4.0, 0.0], 3), vec![3, 1, 2]);
    }

    #[test]
    fn ties_keep_index_order() {
        assert_eq!(k_nearest(&[2.0, 1.0, 2.0, 1.0, 2.0], 4), vec![1, 3, 0, 2]);
    }

    #[test]
    fn k_larger_than_training_set_returns_everything() {
        assert_eq!(k_nearest(&[3.0, 1.0], 10), vec![1, 0]);
    }

    #[test]
    fn nan_sorts_last() {
        assert_eq!(k_nearest(&[f64::NAN, 5.0, 1.0], 3), vec![2, 1, 0]);
    }

    #[test]
    fn tally_counts_codes() {
        let codes = [0, 1, 1, 2, 0];
        assert_eq!(tally(&[1, 2, 4], &codes, 3), vec![1, 2, 0]);
    }

    #[test]
    fn majority_prefers_smallest_code_on_ties() {
        assert_eq!(majority(&[0, 2, 2]), 1);
        assert_eq!(majority(&[1, 1, 1]), 0);
        assert_eq!(majority(&[0, 0, 3]), 2);
    }
}
