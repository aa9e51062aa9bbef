pub mod tune;

use std::ops::Range;

use ndarray::ArrayView1;

use crate::classify;
use crate::error::{Error, Result};
use crate::search;
use crate::types::label_set::LabelSet;
use crate::types::point_set::PointSet;
use crate::types::Label;

/// The outcome of one cross-validation run: the per-fold accuracies together
/// with their mean and population variance.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossValidation {
    pub mean_accuracy: f64,
    pub variance: f64,
    pub fold_accuracies: Vec<f64>,
}

/// Returns the fraction of positions where the two label sequences agree.
///
/// Labels are compared by exact equality. Returns an error if the sequences
/// are empty or differ in length.
pub fn accuracy(truth: ArrayView1<Label>, predicted: ArrayView1<Label>) -> Result<f64> {
    if truth.len() != predicted.len() {
        return Err(Error::InvalidArgument(format!(
            "there are {} true labels but {} predicted labels",
            truth.len(),
            predicted.len()
        )));
    }
    if truth.is_empty() {
        return Err(Error::InvalidArgument("no labels to compare".to_string()));
    }
    let matches = truth
        .iter()
        .zip(predicted.iter())
        .filter(|(t, p)| t == p)
        .count();
    Ok(matches as f64 / truth.len() as f64)
}

/// Splits `n` rows into `num_folds` contiguous index ranges whose sizes
/// differ by at most one.
///
/// The first `n % num_folds` folds take the extra row, so fold membership is
/// a pure function of row order and `num_folds` and no fold is ever empty.
/// Returns an error unless `2 <= num_folds <= n`.
pub fn fold_bounds(n: usize, num_folds: usize) -> Result<Vec<Range<usize>>> {
    if num_folds < 2 || num_folds > n {
        return Err(Error::InvalidArgument(format!(
            "num_folds must be in [2, {}], got {}",
            n, num_folds
        )));
    }
    let base = n / num_folds;
    let extra = n % num_folds;
    let mut bounds = Vec::with_capacity(num_folds);
    let mut start = 0;
    for fold in 0..num_folds {
        let size = base + usize::from(fold < extra);
        bounds.push(start..start + size);
        start += size;
    }
    Ok(bounds)
}

/// K-fold cross-validation of the classifier with the given `k`.
///
/// The folds are contiguous, order-preserving slices of the input; there is
/// no shuffling, so repeated calls over the same inputs produce identical
/// statistics. Each fold is held out once as the validation set while the
/// remaining folds, concatenated in their original order, form the training
/// subset. The variance reported is the population variance of the per-fold
/// accuracies (divide by `num_folds`).
///
/// `k` is validated against the smallest training subset up front; an
/// oversized `k` fails instead of being clamped.
pub fn cross_validate(
    points: &PointSet,
    labels: &LabelSet,
    num_folds: usize,
    k: usize,
) -> Result<CrossValidation> {
    classify::validate_labels(points, labels)?;
    let n = points.num_points();
    let bounds = fold_bounds(n, num_folds)?;
    let largest_fold = bounds.iter().map(|bound| bound.len()).max().unwrap_or(0);
    search::validate_k(k, n - largest_fold)?;

    let mut fold_accuracies = Vec::with_capacity(num_folds);
    for held_out in &bounds {
        let train_ids: Vec<usize> = (0..n).filter(|id| !held_out.contains(id)).collect();
        let train_points = points.select(&train_ids);
        let train_labels = labels.select(&train_ids);

        let validation_ids: Vec<usize> = held_out.clone().collect();
        let validation_points = points.select(&validation_ids);
        let validation_labels = labels.select(&validation_ids);

        let predicted = classify::predict(&train_points, &train_labels, &validation_points, k)?;
        fold_accuracies.push(accuracy(validation_labels.view(), predicted.view())?);
    }

    let mean_accuracy = fold_accuracies.iter().sum::<f64>() / num_folds as f64;
    let variance = fold_accuracies
        .iter()
        .map(|fold_accuracy| (fold_accuracy - mean_accuracy).powi(2))
        .sum::<f64>()
        / num_folds as f64;

    Ok(CrossValidation { mean_accuracy, variance, fold_accuracies })
}

#[cfg(test)]
mod tests {
    use approx_eq::assert_approx_eq;
    use ndarray::{array, Array1, Array2};
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;

    use crate::error::Error;
    use crate::types::label_set::LabelSet;
    use crate::types::point_set::PointSet;

    use super::*;

    #[test]
    fn test_accuracy_examples() {
        let truth = array![0, 1, 2, 1, 1, 0];

        let value = accuracy(truth.view(), array![5, 1, 0, 0, 1, 0].view()).unwrap();
        assert_approx_eq!(value, 3.0 / 6.0, 1e-12);

        let value = accuracy(truth.view(), array![5, 1, 2, 0, 1, 0].view()).unwrap();
        assert_approx_eq!(value, 4.0 / 6.0, 1e-12);
    }

    #[test]
    fn test_accuracy_rejects_bad_inputs() {
        let truth = array![0, 1, 2];
        let error = accuracy(truth.view(), array![0, 1].view()).unwrap_err();
        assert!(matches!(error, Error::InvalidArgument(_)));

        let empty = Array1::zeros(0);
        assert!(accuracy(empty.view(), empty.view()).is_err());
    }

    #[test]
    fn test_fold_partition_invariants() {
        for n in 2..=12 {
            for num_folds in 2..=n {
                let bounds = fold_bounds(n, num_folds).unwrap();
                assert_eq!(bounds.len(), num_folds);
                assert_eq!(bounds[0].start, 0);
                assert_eq!(bounds[bounds.len() - 1].end, n);
                for pair in bounds.windows(2) {
                    assert_eq!(pair[0].end, pair[1].start);
                }

                let sizes: Vec<usize> = bounds.iter().map(|bound| bound.len()).collect();
                let smallest = sizes.iter().min().unwrap();
                let largest = sizes.iter().max().unwrap();
                assert!(largest - smallest <= 1);
                assert!(*smallest >= 1);
            }
        }
    }

    #[test]
    fn test_fold_bounds_rejects_bad_counts() {
        for num_folds in [0, 1, 6] {
            let error = fold_bounds(5, num_folds).unwrap_err();
            assert!(matches!(error, Error::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_cross_validation_on_separated_clusters() {
        let points =
            PointSet::new(array![[0.0], [0.1], [0.2], [10.0], [10.1], [10.2]]).unwrap();
        let labels = LabelSet::new(array![0, 0, 0, 1, 1, 1]).unwrap();

        let report = cross_validate(&points, &labels, 3, 1).unwrap();
        assert_eq!(report.fold_accuracies.len(), 3);
        assert_approx_eq!(report.mean_accuracy, 1.0, 1e-12);
        assert!(report.variance.abs() < 1e-12);
    }

    #[test]
    fn test_population_variance() {
        // Fold 0 trains on two identically labeled rows and misclassifies
        // one of its two held-out queries; fold 1 gets both right. The
        // variance of [0.5, 1.0] divides by the fold count, not by
        // num_folds - 1.
        let points = PointSet::new(array![[0.0], [1.0], [10.0], [11.0]]).unwrap();
        let labels = LabelSet::new(array![0, 1, 1, 1]).unwrap();

        let report = cross_validate(&points, &labels, 2, 1).unwrap();
        assert_eq!(report.fold_accuracies, vec![0.5, 1.0]);
        assert_approx_eq!(report.mean_accuracy, 0.75, 1e-12);
        assert_approx_eq!(report.variance, 0.0625, 1e-12);
    }

    #[test]
    fn test_cross_validation_is_deterministic() {
        let points = PointSet::new(Array2::random((24, 3), Uniform::new(0.0, 1.0))).unwrap();
        let labels = LabelSet::new(Array1::random(24, Uniform::new(0, 3))).unwrap();

        let first = cross_validate(&points, &labels, 4, 3).unwrap();
        let second = cross_validate(&points, &labels, 4, 3).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cross_validation_rejects_oversized_k() {
        let points =
            PointSet::new(array![[0.0], [0.1], [0.2], [10.0], [10.1], [10.2]]).unwrap();
        let labels = LabelSet::new(array![0, 0, 0, 1, 1, 1]).unwrap();

        // With 3 folds of 6 rows, every training subset has 4 rows; k = 4 is
        // the largest valid choice.
        assert!(cross_validate(&points, &labels, 3, 4).is_ok());
        for k in [0, 5] {
            let error = cross_validate(&points, &labels, 3, k).unwrap_err();
            assert!(matches!(error, Error::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_cross_validation_label_mismatch() {
        let points = PointSet::new(array![[0.0], [1.0], [2.0], [3.0]]).unwrap();
        let labels = LabelSet::new(array![0, 1]).unwrap();

        let error = cross_validate(&points, &labels, 2, 1).unwrap_err();
        assert!(matches!(error, Error::InvalidArgument(_)));
    }
}
