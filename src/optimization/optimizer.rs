/// An update rule for the model's coefficient.
pub trait Optimizer {
    /// Returns the coefficient that follows `coef` given the loss derivative at it.
    fn step(&self, coef: f64, derivative: f64) -> f64;
}

impl<T: Optimizer + ?Sized> Optimizer for Box<T> {
    fn step(&self, coef: f64, derivative: f64) -> f64 {
        (**self).step(coef, derivative)
    }
}
