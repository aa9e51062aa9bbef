//! Exact k-nearest-neighbor classification over dense feature matrices.
//!
//! Every query is compared against every training example with the Euclidean
//! metric, and the k closest examples vote on the label. There is no index
//! structure and no randomness anywhere in the pipeline, so every result is
//! exactly reproducible, including cross-validation statistics.
//!
//! ## Classifying a batch of queries
//!
//! ```rust
//! use ndarray::array;
//! use knn_classify::{LabelSet, PointSet};
//!
//! let examples = PointSet::new(array![[0.0, 0.0], [0.0, 1.0], [5.0, 5.0], [5.0, 6.0]])
//!     .expect("failed to create the example set");
//! let labels = LabelSet::new(array![0, 0, 1, 1]).expect("failed to create the label set");
//! let queries = PointSet::new(array![[0.2, 0.1], [5.1, 5.4]]).unwrap();
//!
//! let predicted = knn_classify::predict(&examples, &labels, &queries, 3).unwrap();
//! assert_eq!(predicted, array![0, 1]);
//! ```
//!
//! ## Selecting k by cross-validation
//!
//! ```rust
//! use ndarray::array;
//! use knn_classify::{LabelSet, PointSet};
//!
//! let examples = PointSet::new(array![[0.0], [0.1], [0.2], [10.0], [10.1], [10.2]]).unwrap();
//! let labels = LabelSet::new(array![0, 0, 0, 1, 1, 1]).unwrap();
//!
//! let report = knn_classify::cross_validate(&examples, &labels, 3, 1).unwrap();
//! assert_eq!(report.mean_accuracy, 1.0);
//! ```

pub mod classify;
pub mod data;
mod error;
pub mod eval;
pub mod io;
pub mod search;
mod types;

pub use crate::error::{Error, Result};

pub use crate::types::label_set::LabelSet;
pub use crate::types::point_set::PointSet;
pub use crate::types::Label;

pub use crate::classify::{classify, predict};
pub use crate::data::ClassificationDataset;
pub use crate::eval::tune::{evaluate_candidate, KReport};
pub use crate::eval::{accuracy, cross_validate, fold_bounds, CrossValidation};
pub use crate::io::Hdf5File;
pub use crate::search::{euclidean, nearest};
