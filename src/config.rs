//! Configuration management for the face shape recognition pipeline

use crate::constants::{DEFAULT_FINALIZATION_WINDOW_SECS, DEFAULT_MIN_CONFIDENCE};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Temporal stabilizer configuration
    pub stabilizer: StabilizerConfig,
}

/// Temporal stabilizer parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StabilizerConfig {
    /// Observation window before a verdict may be finalized, in seconds
    pub finalization_window_seconds: f64,

    /// Minimum majority-vote confidence required to finalize (0.0-1.0)
    pub min_confidence: f64,

    /// When false, the verdict finalizes on timeout regardless of
    /// confidence
    pub confidence_gate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stabilizer: StabilizerConfig::default(),
        }
    }
}

impl Default for StabilizerConfig {
    fn default() -> Self {
        Self {
            finalization_window_seconds: DEFAULT_FINALIZATION_WINDOW_SECS,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            confidence_gate: true,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.stabilizer.finalization_window_seconds <= 0.0 {
            return Err(Error::ConfigError(
                "Finalization window must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.stabilizer.min_confidence) {
            return Err(Error::ConfigError(
                "Minimum confidence must be between 0.0 and 1.0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Face Shape Recognition Configuration

# Temporal stabilizer
stabilizer:
  finalization_window_seconds: 10.0
  min_confidence: 0.6
  confidence_gate: true
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!((config.stabilizer.finalization_window_seconds - 10.0).abs() < f64::EPSILON);
        assert!((config.stabilizer.min_confidence - 0.6).abs() < f64::EPSILON);
        assert!(config.stabilizer.confidence_gate);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert!((config.stabilizer.finalization_window_seconds - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = serde_yaml::from_str("stabilizer:\n  min_confidence: 0.8\n").unwrap();
        assert!((config.stabilizer.min_confidence - 0.8).abs() < f64::EPSILON);
        assert!((config.stabilizer.finalization_window_seconds - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.stabilizer.finalization_window_seconds = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.stabilizer.min_confidence = 1.5;
        assert!(config.validate().is_err());
    }
}
