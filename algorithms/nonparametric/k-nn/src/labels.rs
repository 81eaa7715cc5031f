//! Mapping between arbitrary ordered labels and contiguous class codes.

/// Sorted, deduplicated table of the classes seen at fit time.
///
/// Code `c` is the position of a label in ascending order, so comparing
/// codes is the same as comparing labels. Vote counting works on codes,
/// which lets string or enum labels behave exactly like small integers.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde_crate::Serialize, serde_crate::Deserialize),
    serde(crate = "serde_crate")
)]
pub struct LabelEncoder<L> {
    classes: Vec<L>,
}

impl<L: Clone + Ord> LabelEncoder<L> {
    pub fn fit(labels: &[L]) -> Self {
        let mut classes = labels.to_vec();
        classes.sort();
        classes.dedup();
        Self { classes }
    }

    /// Builds the table and encodes `labels` in one pass over the sorted classes.
    pub fn fit_transform(labels: &[L]) -> (Self, Vec<usize>) {
        let encoder = Self::fit(labels);
        let codes = labels
            .iter()
            .map(|label| encoder.classes.partition_point(|c| c < label))
            .collect();
        (encoder, codes)
    }

    /// Code of `label`, or `None` if it was not seen at fit time.
    pub fn encode(&self, label: &L) -> Option<usize> {
        self.classes.binary_search(label).ok()
    }

    pub fn decode(&self, code: usize) -> Option<&L> {
        self.classes.get(code)
    }

    pub fn classes(&self) -> &[L] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
