use std::cmp::Ordering;
use std::collections::BinaryHeap;

use linfa_linalg::norm::Norm;
use ndarray::ArrayView1;

use crate::error::{Error, Result};
use crate::types::point_set::PointSet;

/// Straight-line L2 distance between two points of equal dimension.
pub fn euclidean(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    (&a - &b).norm_l2()
}

/// A candidate neighbor encountered during a scan.
///
/// Candidates are totally ordered by distance, with the original point id
/// breaking exact-distance ties so that selection is stable: among equally
/// distant points, the one with the lowest id ranks first.
#[derive(Clone, Copy, Debug)]
struct SearchResult {
    id: usize,
    distance: f64,
}

impl PartialEq for SearchResult {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchResult {}

impl PartialOrd for SearchResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchResult {
    fn cmp(&self, other: &SearchResult) -> Ordering {
        self.distance.total_cmp(&other.distance).then(self.id.cmp(&other.id))
    }
}

/// Finds the ids of the `k` points nearest to `query`, ordered by ascending
/// distance.
///
/// The scan is brute force: the query is compared against every row of
/// `points`. Exact-distance ties resolve to the lowest id, which makes the
/// result deterministic and the set returned for `k` a subset of the set
/// returned for `k + 1`. Querying with a point of the set and `k = 1`
/// returns that point's own id.
///
/// Returns an error if `query` does not match the dimension of `points`, or
/// if `k` is outside `[1, n]`.
pub fn nearest(points: &PointSet, query: ArrayView1<f64>, k: usize) -> Result<Vec<usize>> {
    validate_query(points, query)?;
    validate_k(k, points.num_points())?;
    Ok(k_smallest(points, query, k))
}

pub(crate) fn validate_query(points: &PointSet, query: ArrayView1<f64>) -> Result<()> {
    if query.len() != points.num_dimensions() {
        return Err(Error::InvalidArgument(format!(
            "query has dimension {}, but the point set has dimension {}",
            query.len(),
            points.num_dimensions()
        )));
    }
    Ok(())
}

pub(crate) fn validate_k(k: usize, available: usize) -> Result<()> {
    if k == 0 || k > available {
        return Err(Error::InvalidArgument(format!(
            "k must be in [1, {}], got {}",
            available, k
        )));
    }
    Ok(())
}

/// Selects the `k` nearest ids from a full distance scan. Inputs must have
/// been validated by the caller.
pub(crate) fn k_smallest(points: &PointSet, query: ArrayView1<f64>, k: usize) -> Vec<usize> {
    // Max-heap of the k best candidates seen so far; the root is the worst
    // of them and is evicted whenever a closer candidate arrives.
    let mut heap: BinaryHeap<SearchResult> = BinaryHeap::with_capacity(k + 1);
    for (id, point) in points.view().outer_iter().enumerate() {
        let candidate = SearchResult { id, distance: euclidean(query, point) };
        if heap.len() < k {
            heap.push(candidate);
        } else if let Some(worst) = heap.peek() {
            if candidate < *worst {
                heap.push(candidate);
                heap.pop();
            }
        }
    }
    heap.into_sorted_vec().iter().map(|result| result.id).collect()
}
