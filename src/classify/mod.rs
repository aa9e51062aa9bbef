use std::collections::HashMap;

use ndarray::{Array1, ArrayView1, Axis, Zip};

use crate::error::{Error, Result};
use crate::search;
use crate::types::label_set::LabelSet;
use crate::types::point_set::PointSet;
use crate::types::Label;

/// Classifies a single query point by majority vote among its `k` nearest
/// neighbors.
///
/// When two or more labels tie for the highest count, the smallest label
/// wins, so the outcome never depends on iteration order.
///
/// Returns an error if `labels` is not aligned with `points`, if the query
/// dimension does not match, or if `k` is outside `[1, n]`.
pub fn classify(
    points: &PointSet,
    labels: &LabelSet,
    query: ArrayView1<f64>,
    k: usize,
) -> Result<Label> {
    validate_labels(points, labels)?;
    let neighbors = search::nearest(points, query, k)?;
    Ok(vote(labels, &neighbors))
}

/// Runs the classifier on every row of `queries`, returning one label per
/// query in input order.
///
/// All inputs are validated before any distance is computed. The queries are
/// independent of each other, so they are classified in parallel; each
/// result is written to its own output slot and input order is preserved.
pub fn predict(
    points: &PointSet,
    labels: &LabelSet,
    queries: &PointSet,
    k: usize,
) -> Result<Array1<Label>> {
    validate_labels(points, labels)?;
    if queries.num_dimensions() != points.num_dimensions() {
        return Err(Error::InvalidArgument(format!(
            "queries have dimension {}, but the point set has dimension {}",
            queries.num_dimensions(),
            points.num_dimensions()
        )));
    }
    search::validate_k(k, points.num_points())?;

    let mut predicted = Array1::<Label>::zeros(queries.num_points());
    Zip::from(queries.view().axis_iter(Axis(0)))
        .and(&mut predicted)
        .par_for_each(|query, out| {
            let neighbors = search::k_smallest(points, query, k);
            *out = vote(labels, &neighbors);
        });
    Ok(predicted)
}

pub(crate) fn validate_labels(points: &PointSet, labels: &LabelSet) -> Result<()> {
    if labels.len() != points.num_points() {
        return Err(Error::InvalidArgument(format!(
            "there are {} points but {} labels",
            points.num_points(),
            labels.len()
        )));
    }
    Ok(())
}

/// Majority vote over the labels of the given neighbors; ties go to the
/// smallest label. `neighbors` must be non-empty.
fn vote(labels: &LabelSet, neighbors: &[usize]) -> Label {
    let mut counts: HashMap<Label, usize> = HashMap::new();
    let mut best_label = labels.label(neighbors[0]);
    let mut best_count = 0;
    for &id in neighbors {
        let label = labels.label(id);
        let count = counts.entry(label).or_insert(0);
        *count += 1;
        if *count > best_count || (*count == best_count && label < best_label) {
            best_label = label;
            best_count = *count;
        }
    }
    best_label
}
