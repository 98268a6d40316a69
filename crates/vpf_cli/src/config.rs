//! CLI configuration management.
//!
//! Settings come from a TOML file (default `vpf.toml`), then environment
//! variables, then command-line flags, each layer overriding the last.
//!
//! ```toml
//! log_level = "info"
//!
//! [estimator]
//! trials = 100
//! seed = 42
//! parallel = false
//!
//! [output]
//! format = "table"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;
use vpf_kernel::mc::{DEFAULT_TRIALS, MAX_TRIALS};

use crate::output::OutputFormat;

/// Configuration error type
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Estimator settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EstimatorSettings {
    /// Trial spheres per radius.
    pub trials: usize,
    /// Fixed seed; entropy when absent.
    pub seed: Option<u64>,
    /// Estimate radii in parallel.
    pub parallel: bool,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            parallel: false,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Result format.
    pub format: OutputFormat,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Estimator settings
    #[serde(default)]
    pub estimator: EstimatorSettings,

    /// Output settings
    #[serde(default)]
    pub output: OutputSettings,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            estimator: EstimatorSettings::default(),
            output: OutputSettings::default(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `VPF_*` environment variable overrides
    pub fn with_env_override(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Unparseable values are ignored, leaving the previous setting.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(trials) = lookup("VPF_TRIALS").and_then(|v| v.parse().ok()) {
            self.estimator.trials = trials;
        }

        if let Some(seed) = lookup("VPF_SEED").and_then(|v| v.parse().ok()) {
            self.estimator.seed = Some(seed);
        }

        if let Some(log_level) = lookup("VPF_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Some(format) = lookup("VPF_FORMAT").and_then(|v| v.parse().ok()) {
            self.output.format = format;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.estimator.trials == 0 || self.estimator.trials > MAX_TRIALS {
            errors.push(format!(
                "estimator.trials {} must be in range [1, {}]",
                self.estimator.trials, MAX_TRIALS
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.estimator.trials, 100);
        assert_eq!(config.estimator.seed, None);
        assert!(!config.estimator.parallel);
        assert_eq!(config.output.format, OutputFormat::Table);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_full() {
        let config = CliConfig::from_toml(
            r#"
log_level = "debug"

[estimator]
trials = 5000
seed = 42
parallel = true

[output]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.estimator.trials, 5000);
        assert_eq!(config.estimator.seed, Some(42));
        assert!(config.estimator.parallel);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_from_toml_partial_uses_defaults() {
        let config = CliConfig::from_toml("[estimator]\nseed = 7\n").unwrap();

        assert_eq!(config.estimator.seed, Some(7));
        assert_eq!(config.estimator.trials, 100);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_from_toml_invalid() {
        let result = CliConfig::from_toml("[estimator]\ntrials = \"many\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"csv\"").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("VPF_TRIALS", "2500"),
            ("VPF_SEED", "99"),
            ("VPF_LOG_LEVEL", "warn"),
            ("VPF_FORMAT", "csv"),
        ]
        .into_iter()
        .collect();

        let config = CliConfig::default().with_overrides(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.estimator.trials, 2500);
        assert_eq!(config.estimator.seed, Some(99));
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_overrides_ignore_garbage() {
        let config = CliConfig::default().with_overrides(|k| match k {
            "VPF_TRIALS" => Some("lots".to_string()),
            "VPF_FORMAT" => Some("xml".to_string()),
            _ => None,
        });

        assert_eq!(config.estimator.trials, 100);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_validate_collects_errors() {
        let mut config = CliConfig::default();
        config.log_level = "loud".to_string();
        config.estimator.trials = 0;

        match config.validate() {
            Err(ConfigError::Validation(errors)) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| e.contains("log_level")));
                assert!(errors.iter().any(|e| e.contains("trials")));
            }
            other => panic!("Expected validation error, got {:?}", other),
        }
    }
}
