use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::info;

use house_regression::{
    dataset, optimization::SignStep, training::LogObserver, ConfigOverrides, Evaluator,
    RegressionErr, Trainer, TrainingConfig,
};

const LOG_EVERY: usize = 100;

/// Fit living area against bedroom and bath counts.
#[derive(Parser, Debug)]
#[command(name = "house-regression")]
#[command(about = "Fit a one coefficient living area model and report its test error")]
struct Args {
    /// Path to the training CSV
    #[arg(long)]
    train: PathBuf,

    /// Path to the test CSV
    #[arg(long)]
    test: PathBuf,

    /// Step size of every coefficient update
    #[arg(long)]
    learning_rate: Option<f64>,

    /// Number of passes over the training data
    #[arg(long)]
    epochs: Option<usize>,

    /// JSON file with training parameters, overridden by the flags above
    #[arg(long)]
    config: Option<PathBuf>,

    /// Leave zero predictions out of the relative error instead of failing
    #[arg(long)]
    skip_zero_predictions: bool,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            learning_rate: self.learning_rate,
            epochs: self.epochs,
            skip_zero_predictions: self.skip_zero_predictions,
        }
    }
}

fn load(path: &Path, what: &'static str) -> anyhow::Result<dataset::Dataset> {
    let report = dataset::load(path)
        .with_context(|| format!("failed to load {what} data from {}", path.display()))?;

    info!(
        "{what} set: {} records, {} dropped for missing values",
        report.dataset.len(),
        report.dropped
    );

    if report.dataset.is_empty() {
        return Err(RegressionErr::EmptyDataset { what })
            .with_context(|| format!("nothing to use in {}", path.display()));
    }

    Ok(report.dataset)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = TrainingConfig::resolve(args.config.as_deref(), args.overrides())
        .context("failed to build the training configuration")?;

    let train_data = load(&args.train, "training")?;
    let test_data = load(&args.test, "test")?;

    let rule = SignStep::new(config.learning_rate);
    let trainer = Trainer::new(rule, config.epochs);
    let mut observer = LogObserver::new(LOG_EVERY, trainer.epochs());
    let a = trainer.train_with(&train_data, config.initial_coef, &mut observer);

    let metrics = Evaluator::new(config.zero_prediction)
        .evaluate(&test_data, a)
        .context("failed to evaluate the fitted coefficient")?;

    println!("Learning Rate: {}", rule.learning_rate());
    println!("Epochs: {}", trainer.epochs());
    println!("Loss: {}", metrics.mean_squared_loss);
    println!("Error: {}", metrics.mean_relative_error);

    Ok(())
}
