use std::{fs, path::Path};

use serde::Deserialize;

use crate::{evaluation::ZeroPredictionPolicy, training::INITIAL_COEF, RegressionErr, Result};

pub const DEFAULT_LEARNING_RATE: f64 = 0.01;
pub const DEFAULT_EPOCHS: usize = 1000;

/// Hyperparameters of a training run.
///
/// Every field is optional in the JSON form, e.g.
/// `{ "learning_rate": 0.05, "epochs": 200, "zero_prediction": "skip" }`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    pub initial_coef: f64,
    pub zero_prediction: ZeroPredictionPolicy,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            epochs: DEFAULT_EPOCHS,
            initial_coef: INITIAL_COEF,
            zero_prediction: ZeroPredictionPolicy::Abort,
        }
    }
}

/// Values given explicitly on the command line.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ConfigOverrides {
    pub learning_rate: Option<f64>,
    pub epochs: Option<usize>,
    pub skip_zero_predictions: bool,
}

impl TrainingConfig {
    /// Parses a configuration from JSON text and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config = Self::parse(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from the JSON file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Builds the configuration of a run: defaults, then the JSON file at
    /// `path` if any, then `overrides`.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let base = match path {
            Some(path) => Self::parse(&fs::read_to_string(path)?)?,
            None => Self::default(),
        };

        base.with_overrides(overrides)
    }

    /// Applies `overrides` on top of `self` and validates the result.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self> {
        if let Some(learning_rate) = overrides.learning_rate {
            self.learning_rate = learning_rate;
        }
        if let Some(epochs) = overrides.epochs {
            self.epochs = epochs;
        }
        if overrides.skip_zero_predictions {
            self.zero_prediction = ZeroPredictionPolicy::Skip;
        }

        self.validate()?;
        Ok(self)
    }

    fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Checks that the values can drive a training run.
    ///
    /// # Errors
    /// Returns `RegressionErr::InvalidConfig` if the learning rate is not a
    /// finite positive number or the initial coefficient is not finite.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(RegressionErr::InvalidConfig(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }

        if !self.initial_coef.is_finite() {
            return Err(RegressionErr::InvalidConfig(format!(
                "initial coefficient must be finite, got {}",
                self.initial_coef
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TrainingConfig::default();
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.epochs, 1000);
        assert_eq!(config.initial_coef, 0.1);
        assert_eq!(config.zero_prediction, ZeroPredictionPolicy::Abort);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = TrainingConfig::from_json(r#"{ "epochs": 25 }"#).unwrap();
        assert_eq!(config.epochs, 25);
        assert_eq!(config.learning_rate, DEFAULT_LEARNING_RATE);
    }

    #[test]
    fn full_json() {
        let json = r#"{
            "learning_rate": 0.5,
            "epochs": 10,
            "initial_coef": 150.0,
            "zero_prediction": "skip"
        }"#;
        let config = TrainingConfig::from_json(json).unwrap();

        assert_eq!(
            config,
            TrainingConfig {
                learning_rate: 0.5,
                epochs: 10,
                initial_coef: 150.0,
                zero_prediction: ZeroPredictionPolicy::Skip,
            }
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = TrainingConfig::from_json(r#"{ "momentum": 0.9 }"#).unwrap_err();
        assert!(matches!(err, RegressionErr::Config(_)));
    }

    #[test]
    fn overrides_win_over_json_and_defaults() {
        let file = TrainingConfig::parse(r#"{ "learning_rate": 0.5, "epochs": 10 }"#).unwrap();
        let overrides = ConfigOverrides {
            epochs: Some(3),
            ..Default::default()
        };
        let config = file.with_overrides(overrides).unwrap();

        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.epochs, 3);
        assert_eq!(config.initial_coef, INITIAL_COEF);
        assert_eq!(config.zero_prediction, ZeroPredictionPolicy::Abort);
    }

    #[test]
    fn flags_can_fix_an_invalid_file_value() {
        let file = TrainingConfig::parse(r#"{ "learning_rate": 0.0 }"#).unwrap();
        let overrides = ConfigOverrides {
            learning_rate: Some(0.25),
            skip_zero_predictions: true,
            ..Default::default()
        };
        let config = file.with_overrides(overrides).unwrap();

        assert_eq!(config.learning_rate, 0.25);
        assert_eq!(config.zero_prediction, ZeroPredictionPolicy::Skip);
    }

    #[test]
    fn invalid_override_is_rejected() {
        let overrides = ConfigOverrides {
            learning_rate: Some(f64::NAN),
            ..Default::default()
        };
        let err = TrainingConfig::default().with_overrides(overrides).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidConfig(_)));
    }

    #[test]
    fn resolve_without_a_file_uses_defaults() {
        let config = TrainingConfig::resolve(None, ConfigOverrides::default()).unwrap();
        assert_eq!(config, TrainingConfig::default());
    }

    #[test]
    fn resolve_reports_a_missing_file() {
        let path = Path::new("/definitely/not/here.json");
        let err = TrainingConfig::resolve(Some(path), ConfigOverrides::default()).unwrap_err();
        assert!(matches!(err, RegressionErr::Io(_)));
    }

    #[test]
    fn non_positive_learning_rate_is_rejected() {
        let err = TrainingConfig::from_json(r#"{ "learning_rate": 0.0 }"#).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidConfig(_)));

        let err = TrainingConfig::from_json(r#"{ "learning_rate": -1.0 }"#).unwrap_err();
        assert!(matches!(err, RegressionErr::InvalidConfig(_)));
    }
}
