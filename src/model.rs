use crate::dataset::HouseRecord;

/// Predicts the living area of a house: `a * (beds + baths)`.
#[inline]
pub fn predict(beds: f64, baths: f64, a: f64) -> f64 {
    a * (beds + baths)
}

/// Squared difference between an expected and an actual value.
#[inline]
pub fn squared_loss(expected: f64, actual: f64) -> f64 {
    (expected - actual).powi(2)
}

/// A fitted model. Holds the single coefficient found by training.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    coef: f64,
}

impl LinearModel {
    /// Returns a new `LinearModel`.
    ///
    /// # Arguments
    /// * `coef` - The fitted coefficient.
    pub fn new(coef: f64) -> Self {
        Self { coef }
    }

    #[inline]
    pub fn coef(&self) -> f64 {
        self.coef
    }

    /// Predicts the living area for `record`.
    #[inline]
    pub fn predict(&self, record: &HouseRecord) -> f64 {
        predict(record.beds(), record.baths(), self.coef)
    }
}
