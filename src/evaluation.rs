use log::{info, warn};
use ndarray::Array1;
use serde::Deserialize;

use crate::{
    dataset::Dataset,
    model::{squared_loss, LinearModel},
    RegressionErr, Result,
};

/// What to do with a test record whose prediction is zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroPredictionPolicy {
    /// Fail the whole evaluation.
    #[default]
    Abort,
    /// Leave the record out of the relative error mean.
    Skip,
}

/// Error summary of a fitted coefficient over a test set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub mean_squared_loss: f64,
    pub mean_relative_error: f64,
    /// Records that contributed to the relative error.
    pub evaluated: usize,
    /// Records left out of the relative error for predicting zero.
    pub skipped: usize,
}

/// Scores a coefficient against held out records.
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator {
    policy: ZeroPredictionPolicy,
}

impl Evaluator {
    /// Returns a new `Evaluator`.
    ///
    /// # Arguments
    /// * `policy` - How zero predictions are handled.
    pub fn new(policy: ZeroPredictionPolicy) -> Self {
        Self { policy }
    }

    /// Computes the mean squared loss and the mean relative absolute error
    /// of `a` over `dataset`.
    ///
    /// The relative error of a record is `|expected - actual| / actual`,
    /// where `actual` is the prediction.
    ///
    /// # Errors
    /// * `RegressionErr::EmptyDataset` if `dataset` is empty, or every record
    ///   was skipped.
    /// * `RegressionErr::DivisionByZero` if a prediction is zero and the
    ///   policy is `Abort`.
    pub fn evaluate(&self, dataset: &Dataset, a: f64) -> Result<Metrics> {
        let empty = || RegressionErr::EmptyDataset { what: "test" };

        let model = LinearModel::new(a);
        let mut losses = Vec::with_capacity(dataset.len());
        let mut errors = Vec::with_capacity(dataset.len());
        let mut skipped = 0;

        for (index, record) in dataset.iter().enumerate() {
            let expected = record.squarefeet();
            let actual = model.predict(record);
            losses.push(squared_loss(actual, expected));

            if actual == 0.0 {
                match self.policy {
                    ZeroPredictionPolicy::Abort => {
                        return Err(RegressionErr::DivisionByZero { index })
                    }
                    ZeroPredictionPolicy::Skip => {
                        warn!("skipping test record {index}: prediction is zero");
                        skipped += 1;
                        continue;
                    }
                }
            }

            errors.push((expected - actual).abs() / actual);
        }

        let evaluated = errors.len();
        let mean_squared_loss = Array1::from(losses).mean().ok_or_else(empty)?;
        let mean_relative_error = Array1::from(errors).mean().ok_or_else(empty)?;

        info!("evaluated {evaluated} records ({skipped} skipped)");

        Ok(Metrics {
            mean_squared_loss,
            mean_relative_error,
            evaluated,
            skipped,
        })
    }
}

/// Evaluates `a` over `dataset`, failing on any zero prediction.
pub fn evaluate(dataset: &Dataset, a: f64) -> Result<Metrics> {
    Evaluator::default().evaluate(dataset, a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::HouseRecord;

    fn dataset(rows: &[(f64, f64, f64)]) -> Dataset {
        rows.iter()
            .map(|&(beds, baths, sf)| HouseRecord::new(beds, baths, sf).unwrap())
            .collect()
    }

    #[test]
    fn averages_loss_and_relative_error() {
        // Predictions: 100 * 4 = 400 and 100 * 5 = 500.
        let ds = dataset(&[(2.0, 2.0, 600.0), (3.0, 2.0, 500.0)]);
        let m = evaluate(&ds, 100.0).unwrap();

        assert_eq!(m.mean_squared_loss, (200.0 * 200.0 + 0.0) / 2.0);
        assert_eq!(m.mean_relative_error, (0.5 + 0.0) / 2.0);
        assert_eq!(m.evaluated, 2);
        assert_eq!(m.skipped, 0);
    }

    #[test]
    fn empty_test_set_is_an_error() {
        let err = evaluate(&Dataset::default(), 0.1).unwrap_err();
        assert!(matches!(err, RegressionErr::EmptyDataset { what: "test" }));
    }

    #[test]
    fn zero_prediction_aborts_by_default() {
        let ds = dataset(&[(2.0, 1.0, 900.0), (0.0, 0.0, 400.0)]);
        let err = evaluate(&ds, 300.0).unwrap_err();
        assert!(matches!(err, RegressionErr::DivisionByZero { index: 1 }));
    }

    #[test]
    fn zero_prediction_can_be_skipped() {
        let ds = dataset(&[(2.0, 1.0, 600.0), (0.0, 0.0, 400.0)]);
        let m = Evaluator::new(ZeroPredictionPolicy::Skip)
            .evaluate(&ds, 300.0)
            .unwrap();

        // Loss still counts the skipped record.
        assert_eq!(m.mean_squared_loss, (300.0 * 300.0 + 400.0 * 400.0) / 2.0);
        assert_eq!(m.mean_relative_error, 300.0 / 900.0);
        assert_eq!(m.evaluated, 1);
        assert_eq!(m.skipped, 1);
    }

    #[test]
    fn skipping_every_record_is_an_error() {
        let ds = dataset(&[(2.0, 1.0, 600.0)]);
        let err = Evaluator::new(ZeroPredictionPolicy::Skip)
            .evaluate(&ds, 0.0)
            .unwrap_err();
        assert!(matches!(err, RegressionErr::EmptyDataset { .. }));
    }
}
