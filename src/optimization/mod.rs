mod gradient;
mod optimizer;
mod sign_step;

pub use gradient::partial_derivative;
pub use optimizer::Optimizer;
pub use sign_step::SignStep;
