use std::time::{Duration, Instant};

use crate::classify;
use crate::error::Result;
use crate::eval::{accuracy, cross_validate, CrossValidation};
use crate::types::label_set::LabelSet;
use crate::types::point_set::PointSet;

/// Metrics gathered for one candidate value of k.
#[derive(Debug, Clone)]
pub struct KReport {
    pub k: usize,

    /// Accuracy of predicting the training set against itself. Optimistic,
    /// especially at k = 1 where every point is its own nearest neighbor.
    pub train_accuracy: f64,

    pub cross_validation: CrossValidation,

    /// Wall-clock time spent on both evaluations.
    pub elapsed: Duration,
}

/// Evaluates one candidate `k`: whole-set self-prediction accuracy plus
/// `num_folds`-fold cross-validation, with timing.
///
/// A candidate too large for the training set or for the cross-validation
/// training subsets fails with the usual `InvalidArgument` error; it is
/// never truncated to fit.
pub fn evaluate_candidate(
    points: &PointSet,
    labels: &LabelSet,
    k: usize,
    num_folds: usize,
) -> Result<KReport> {
    let started = Instant::now();

    let predicted = classify::predict(points, labels, points, k)?;
    let train_accuracy = accuracy(labels.view(), predicted.view())?;
    let cross_validation = cross_validate(points, labels, num_folds, k)?;

    Ok(KReport { k, train_accuracy, cross_validation, elapsed: started.elapsed() })
}

#[cfg(test)]
mod tests {
    use approx_eq::assert_approx_eq;
    use ndarray::array;

    use crate::error::Error;
    use crate::types::label_set::LabelSet;
    use crate::types::point_set::PointSet;

    use super::*;

    fn example_data() -> (PointSet, LabelSet) {
        let points =
            PointSet::new(array![[0.0], [0.1], [0.2], [10.0], [10.1], [10.2]]).unwrap();
        let labels = LabelSet::new(array![0, 0, 0, 1, 1, 1]).unwrap();
        (points, labels)
    }

    #[test]
    fn test_self_prediction_is_perfect_at_k_1() {
        let (points, labels) = example_data();
        let report = evaluate_candidate(&points, &labels, 1, 3).unwrap();
        assert_eq!(report.k, 1);
        assert_approx_eq!(report.train_accuracy, 1.0, 1e-12);
        assert_eq!(report.cross_validation.fold_accuracies.len(), 3);
    }

    #[test]
    fn test_oversized_candidate_fails_cleanly() {
        let (points, labels) = example_data();
        let error = evaluate_candidate(&points, &labels, 999, 3).unwrap_err();
        assert!(matches!(error, Error::InvalidArgument(_)));
    }
}
