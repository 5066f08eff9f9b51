use std::{error::Error, fmt, io};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, RegressionErr>;

/// Failures that can end a training run.
#[derive(Debug)]
pub enum RegressionErr {
    /// A data source or configuration file could not be read.
    Io(io::Error),
    /// The tabular source is malformed.
    Csv(csv::Error),
    /// The configuration file is not valid JSON or has the wrong shape.
    Config(serde_json::Error),
    /// A configuration value is out of range.
    InvalidConfig(String),
    /// A dataset had no usable records.
    EmptyDataset { what: &'static str },
    /// A prediction of zero made the relative error undefined.
    DivisionByZero { index: usize },
}

impl fmt::Display for RegressionErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io error: {e}"),
            Self::Csv(e) => write!(f, "csv error: {e}"),
            Self::Config(e) => write!(f, "config error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::EmptyDataset { what } => {
                write!(f, "the {what} dataset has no usable records")
            }
            Self::DivisionByZero { index } => write!(
                f,
                "prediction for test record {index} is zero, relative error is undefined"
            ),
        }
    }
}

impl Error for RegressionErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Csv(e) => Some(e),
            Self::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RegressionErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for RegressionErr {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<serde_json::Error> for RegressionErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}
