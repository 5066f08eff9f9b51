use super::Optimizer;

/// Constant step update rule.
///
/// Moves the coefficient by exactly `learning_rate` against the sign of the
/// derivative. The derivative's magnitude is ignored and a zero (or NaN)
/// derivative leaves the coefficient where it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignStep {
    learning_rate: f64,
}

impl SignStep {
    /// Returns a new `SignStep`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of every step taken on `step`.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }

    /// The size of every step.
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }
}

impl Optimizer for SignStep {
    fn step(&self, coef: f64, derivative: f64) -> f64 {
        if derivative < 0.0 {
            coef + self.learning_rate
        } else if derivative > 0.0 {
            coef - self.learning_rate
        } else {
            coef
        }
    }
}
