use anyhow::Context;
use clap::Parser;
use knn_classify::{evaluate_candidate, ClassificationDataset, Hdf5File};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to an hdf5 file containing the dataset.
    #[clap(long, required = true)]
    path: String,

    /// Candidate values of k to evaluate.
    #[clap(long, value_delimiter = ',', default_value = "1,3,5,7,9,99,999,8000")]
    k: Vec<usize>,

    /// Number of cross-validation folds.
    #[clap(long, default_value_t = 4)]
    num_folds: usize,
}

/// creates a progress bar with the default template
fn create_progress(name: &str, elems: usize) -> indicatif::ProgressBar {
    let pb = indicatif::ProgressBar::new(elems as u64);
    let rest = "[{elapsed_precise}] [{bar:40.cyan/blue}] ({pos}/{len}, ETA {eta})";
    pb.set_style(indicatif::ProgressStyle::default_bar().template(&format!("{}: {}", name, rest)));
    pb
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let dataset = ClassificationDataset::read(args.path.as_str())
        .with_context(|| format!("Unable to load the dataset at '{}'", args.path))?;

    println!(
        "Performing {}-fold cross validation on {} examples",
        args.num_folds,
        dataset.examples().num_points()
    );

    let pb = create_progress("Evaluating candidates", args.k.len());
    for &k in &args.k {
        match evaluate_candidate(dataset.examples(), dataset.labels(), k, args.num_folds) {
            Ok(report) => {
                pb.println(format!(
                    "k = {:5} -- train acc = {:.2}%  val acc = {:.2}% ({:.4})\t[exe_time = {:.2?}]",
                    report.k,
                    report.train_accuracy * 100.0,
                    report.cross_validation.mean_accuracy * 100.0,
                    report.cross_validation.variance * 100.0,
                    report.elapsed
                ));
            }
            Err(error) => {
                pb.println(format!("k = {:5} -- skipped: {}", k, error));
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(())
}
