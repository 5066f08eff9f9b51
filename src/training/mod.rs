mod observer;
mod trainer;

pub use observer::{EpochObserver, LogObserver, NoopObserver};
pub use trainer::{train, Trainer, INITIAL_COEF};
