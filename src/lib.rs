//! Fits the coefficient `a` of `squarefeet = a * (beds + baths)` with a
//! constant step sign rule and scores it on held out houses.

pub mod config;
pub mod dataset;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod optimization;
pub mod training;

pub use config::{ConfigOverrides, TrainingConfig};
pub use dataset::{Dataset, HouseRecord};
pub use error::{RegressionErr, Result};
pub use evaluation::{evaluate, Evaluator, Metrics, ZeroPredictionPolicy};
pub use training::{train, Trainer};
