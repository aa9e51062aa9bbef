use std::fmt;
use std::fmt::Formatter;

use anyhow::anyhow;
use hdf5::File;
use ndarray::{Array1, Array2, ArrayView1};

use crate::io::Hdf5File;
use crate::types::label_set::LabelSet;
use crate::types::point_set::PointSet;
use crate::types::Label;

const TRAIN_X: &str = "train_x";
const TRAIN_Y: &str = "train_y";
const TEST_X: &str = "test_x";
const ID: &str = "id";
const PREDICTION: &str = "prediction";

/// A labeled classification dataset: a matrix of training examples, the
/// label vector aligned with it, and optionally a matrix of unlabeled
/// queries to predict.
///
/// On disk the dataset is an HDF5 file with named datasets: `train_x`
/// (f64, n-by-d), `train_y` (i64, n), and optionally `test_x` (f64, m-by-d).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationDataset {
    examples: PointSet,
    labels: LabelSet,
    queries: Option<PointSet>,
}

impl ClassificationDataset {
    /// Creates a dataset.
    ///
    /// Returns an error if `labels` is not aligned with `examples`, or if
    /// the query matrix does not match the example dimension.
    pub fn new(
        examples: PointSet,
        labels: LabelSet,
        queries: Option<PointSet>,
    ) -> anyhow::Result<ClassificationDataset> {
        if labels.len() != examples.num_points() {
            return Err(anyhow!(
                "There are {} examples but {} labels!",
                examples.num_points(),
                labels.len()
            ));
        }
        if let Some(queries) = queries.as_ref() {
            if queries.num_dimensions() != examples.num_dimensions() {
                return Err(anyhow!(
                    "Queries have dimension {} but examples have dimension {}",
                    queries.num_dimensions(),
                    examples.num_dimensions()
                ));
            }
        }
        Ok(ClassificationDataset { examples, labels, queries })
    }

    /// Returns the training examples.
    pub fn examples(&self) -> &PointSet { &self.examples }

    /// Returns the label vector aligned with the examples.
    pub fn labels(&self) -> &LabelSet { &self.labels }

    /// Returns the unlabeled query matrix, if the dataset has one.
    pub fn queries(&self) -> Option<&PointSet> { self.queries.as_ref() }
}

fn read_matrix(file: &File, label: &str) -> anyhow::Result<Array2<f64>> {
    let dataset = file.dataset(label)?;
    let shape = dataset.shape();
    if shape.len() != 2 {
        return Err(anyhow!(
            "Dataset '{}' must be a matrix, found shape {:?}",
            label,
            shape
        ));
    }
    let values = dataset.read_raw::<f64>()?;
    Ok(Array2::from_shape_vec((shape[0], shape[1]), values)?)
}

impl Hdf5File for ClassificationDataset {
    type Object = ClassificationDataset;

    fn write(&self, path: &str) -> anyhow::Result<()> {
        let file = File::create(path)?;

        let examples = file
            .new_dataset::<f64>()
            .shape((self.examples.num_points(), self.examples.num_dimensions()))
            .create(TRAIN_X)?;
        examples.write(self.examples.view())?;

        let labels = file.new_dataset::<Label>().shape(self.labels.len()).create(TRAIN_Y)?;
        labels.write(self.labels.view())?;

        if let Some(queries) = self.queries.as_ref() {
            let dataset = file
                .new_dataset::<f64>()
                .shape((queries.num_points(), queries.num_dimensions()))
                .create(TEST_X)?;
            dataset.write(queries.view())?;
        }

        file.close()?;
        Ok(())
    }

    fn read(path: &str) -> anyhow::Result<ClassificationDataset> {
        let file = File::open(path)?;

        let examples = PointSet::new(read_matrix(&file, TRAIN_X)?)?;
        let labels = Array1::from(file.dataset(TRAIN_Y)?.read_raw::<Label>()?);
        let labels = LabelSet::new(labels)?;
        let queries = if file.link_exists(TEST_X) {
            Some(PointSet::new(read_matrix(&file, TEST_X)?)?)
        } else {
            None
        };

        ClassificationDataset::new(examples, labels, queries)
    }
}

/// Stores a prediction table at `path` as two aligned HDF5 datasets: `id`,
/// the query row ids in order, and `prediction`, the predicted labels.
pub fn write_predictions(path: &str, predicted: ArrayView1<Label>) -> anyhow::Result<()> {
    let file = File::create(path)?;

    let ids = Array1::from_iter(0..predicted.len() as Label);
    let dataset = file.new_dataset::<Label>().shape(ids.len()).create(ID)?;
    dataset.write(ids.view())?;

    let dataset = file.new_dataset::<Label>().shape(predicted.len()).create(PREDICTION)?;
    dataset.write(predicted)?;

    file.close()?;
    Ok(())
}

impl fmt::Display for ClassificationDataset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} examples of dimension {}",
            self.examples.num_points(),
            self.examples.num_dimensions()
        )?;
        match self.queries.as_ref() {
            Some(queries) => write!(f, ", {} queries", queries.num_points()),
            None => write!(f, ", no queries"),
        }
    }
}
