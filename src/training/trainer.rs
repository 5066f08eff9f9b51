use log::info;

use super::{EpochObserver, NoopObserver};
use crate::{
    dataset::Dataset,
    optimization::{partial_derivative, Optimizer, SignStep},
};

/// The coefficient every run starts from unless configured otherwise.
pub const INITIAL_COEF: f64 = 0.1;

/// Fits the coefficient with a fixed number of passes over a dataset.
///
/// There is no convergence check: every call runs all `epochs` epochs and
/// visits the records in dataset order, one update per record.
pub struct Trainer<O: Optimizer> {
    optimizer: O,
    epochs: usize,
}

impl<O: Optimizer> Trainer<O> {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `optimizer` - The update rule applied after every record.
    /// * `epochs` - The amount of full passes over the dataset.
    pub fn new(optimizer: O, epochs: usize) -> Self {
        Self { optimizer, epochs }
    }

    /// The number of passes every `train` call performs.
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Trains starting at `initial` and returns the final coefficient.
    pub fn train(&self, dataset: &Dataset, initial: f64) -> f64 {
        self.train_with(dataset, initial, &mut NoopObserver)
    }

    /// Same as `train`, notifying `observer` at the end of every epoch.
    pub fn train_with(
        &self,
        dataset: &Dataset,
        initial: f64,
        observer: &mut dyn EpochObserver,
    ) -> f64 {
        info!(
            "training on {} records for {} epochs, a = {initial}",
            dataset.len(),
            self.epochs
        );

        let mut a = initial;
        for epoch in 1..=self.epochs {
            a = self.run_epoch(dataset, a);
            observer.on_epoch_end(epoch, a);
        }

        info!("training finished, a = {a}");
        a
    }

    fn run_epoch(&self, dataset: &Dataset, a: f64) -> f64 {
        dataset.iter().fold(a, |a, record| {
            let d = partial_derivative(record.beds(), record.baths(), a, record.squarefeet());
            self.optimizer.step(a, d)
        })
    }
}

/// Trains with the constant step rule from `INITIAL_COEF`.
///
/// # Arguments
/// * `dataset` - The training records.
/// * `learning_rate` - The size of every step.
/// * `epochs` - The amount of full passes over `dataset`.
///
/// # Returns
/// The fitted coefficient.
pub fn train(dataset: &Dataset, learning_rate: f64, epochs: usize) -> f64 {
    Trainer::new(SignStep::new(learning_rate), epochs).train(dataset, INITIAL_COEF)
}
