use ndarray::{Array1, ArrayView1, Axis};

use crate::error::{Error, Result};
use crate::types::Label;

/// An ordered sequence of class labels, positionally aligned with the rows
/// of a [`PointSet`](crate::PointSet): label i belongs to point i.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: Array1<Label>,
}

impl LabelSet {
    /// Creates a label set. Returns an error if `labels` is empty.
    pub fn new(labels: Array1<Label>) -> Result<LabelSet> {
        if labels.is_empty() {
            return Err(Error::InvalidArgument(
                "label set must contain at least one label".to_string(),
            ));
        }
        Ok(LabelSet { labels })
    }

    /// Returns the number of labels in the set.
    pub fn len(&self) -> usize { self.labels.len() }

    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Returns a view of the underlying vector.
    pub fn view(&self) -> ArrayView1<Label> { self.labels.view() }

    /// Returns the label of the point with the given id.
    pub fn label(&self, id: usize) -> Label { self.labels[id] }

    /// Selects a subset of labels with the given ids, preserving their order.
    pub fn select(&self, ids: &[usize]) -> LabelSet {
        LabelSet { labels: self.labels.select(Axis(0), ids) }
    }
}
