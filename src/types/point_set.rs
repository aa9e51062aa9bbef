use ndarray::{Array2, ArrayView1, ArrayView2, Axis};

use crate::error::{Error, Result};

/// A set of points represented as a dense matrix, where each row corresponds
/// to a single d-dimensional example.
///
/// Row order defines the index identity used by neighbor searches: the i-th
/// row of the matrix is point i everywhere in this crate.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    dense: Array2<f64>,
}

impl PointSet {
    /// Creates a point set.
    ///
    /// Returns an error if the matrix has no rows or its points have zero
    /// dimensions.
    pub fn new(dense: Array2<f64>) -> Result<PointSet> {
        if dense.nrows() == 0 {
            return Err(Error::InvalidArgument(
                "point set must contain at least one point".to_string(),
            ));
        }
        if dense.ncols() == 0 {
            return Err(Error::InvalidArgument(
                "points must have at least one dimension".to_string(),
            ));
        }
        Ok(PointSet { dense })
    }

    /// Returns the number of points in the set.
    pub fn num_points(&self) -> usize { self.dense.nrows() }

    /// Returns the dimensionality shared by every point in the set.
    pub fn num_dimensions(&self) -> usize { self.dense.ncols() }

    /// Returns a view of the underlying matrix.
    pub fn view(&self) -> ArrayView2<f64> { self.dense.view() }

    /// Returns the point with the given id.
    pub fn point(&self, id: usize) -> ArrayView1<f64> { self.dense.row(id) }

    /// Selects a subset of points with the given ids, preserving their order.
    pub fn select(&self, ids: &[usize]) -> PointSet {
        PointSet { dense: self.dense.select(Axis(0), ids) }
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array2, Axis};

    use crate::types::point_set::PointSet;

    #[test]
    fn test_new() {
        assert!(PointSet::new(Array2::zeros((0, 3))).is_err());
        assert!(PointSet::new(Array2::zeros((3, 0))).is_err());

        let points = PointSet::new(Array2::eye(5));
        assert!(points.is_ok());
        let points = points.unwrap();
        assert_eq!(5, points.num_points());
        assert_eq!(5, points.num_dimensions());
    }

    #[test]
    fn test_subset() {
        let dense = Array2::<f64>::eye(10);
        let points = PointSet::new(dense.clone()).unwrap();

        let subset = points.select(&[9]);
        assert_eq!(subset.view(), dense.select(Axis(0), &[9]));

        let subset = points.select(&[0, 3, 9]);
        assert_eq!(subset.view(), dense.select(Axis(0), &[0, 3, 9]));

        // Selection preserves the order of the requested ids.
        let subset = points.select(&[9, 3, 0]);
        assert_eq!(subset.view(), dense.select(Axis(0), &[9, 3, 0]));
    }
}
