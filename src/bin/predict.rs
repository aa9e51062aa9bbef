use anyhow::{anyhow, Context};
use clap::Parser;
use knn_classify::{data, ClassificationDataset, Hdf5File};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to an hdf5 file containing the dataset.
    #[clap(long, required = true)]
    path: String,

    /// Number of nearest neighbors to consult per query.
    #[clap(long, required = true)]
    k: usize,

    /// Path to the output file where the id/prediction table will be stored.
    #[clap(long, required = true)]
    output: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let dataset = ClassificationDataset::read(args.path.as_str())
        .with_context(|| format!("Unable to load the dataset at '{}'", args.path))?;
    let queries = dataset
        .queries()
        .ok_or_else(|| anyhow!("The dataset at '{}' has no query matrix to predict", args.path))?;

    let predicted = knn_classify::predict(dataset.examples(), dataset.labels(), queries, args.k)?;
    data::write_predictions(args.output.as_str(), predicted.view())?;

    println!(
        "Predicted {} queries with k = {}; stored in '{}'",
        predicted.len(),
        args.k,
        args.output
    );
    Ok(())
}
