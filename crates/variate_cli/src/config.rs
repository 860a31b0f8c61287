//! CLI configuration management.
//!
//! Loads `variate.toml` (if present) and applies environment overrides.
//! A missing file yields the defaults; a malformed one is an error.

use serde::Deserialize;
use std::path::Path;

use crate::{CliError, Result};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the `variate` command line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Seed for the uniform source; drawn from entropy when absent
    pub seed: Option<u64>,

    /// Default histogram bin count
    pub bins: usize,

    /// Width in characters of the longest histogram bar
    pub histogram_width: usize,

    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            bins: 20,
            histogram_width: 50,
            log_level: "info".to_string(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise use the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `VARIATE_*` environment variable overrides.
    pub fn with_env_override(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(seed) = lookup("VARIATE_SEED") {
            self.seed = Some(seed.parse().map_err(|_| {
                CliError::Config(format!("VARIATE_SEED must be an unsigned integer, got {}", seed))
            })?);
        }

        if let Some(bins) = lookup("VARIATE_BINS") {
            self.bins = bins.parse().map_err(|_| {
                CliError::Config(format!("VARIATE_BINS must be an unsigned integer, got {}", bins))
            })?;
        }

        if let Some(log_level) = lookup("VARIATE_LOG_LEVEL") {
            self.log_level = log_level.to_lowercase();
        }

        Ok(self)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.bins == 0 {
            errors.push("bins must be at least 1".to_string());
        }
        if self.histogram_width == 0 {
            errors.push("histogram_width must be at least 1".to_string());
        }
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            errors.push(format!(
                "log_level must be one of: {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::Config(errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_are_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bins, 20);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = CliConfig::from_toml("seed = 42\nbins = 8\n").unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.bins, 8);
        assert_eq!(config.histogram_width, 50);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(matches!(
            CliConfig::from_toml("colour = \"blue\""),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let path = std::env::temp_dir().join("variate-config-that-does-not-exist.toml");
        assert_eq!(CliConfig::load_or_default(&path).unwrap(), CliConfig::default());
    }

    #[test]
    fn test_load_of_unreadable_path_is_io_error() {
        let path = std::env::temp_dir().join("variate-config-that-does-not-exist.toml");
        assert!(matches!(CliConfig::load(&path), Err(CliError::Io(_))));
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("variate-config-{}.toml", std::process::id()));
        std::fs::write(&path, "histogram_width = 30\nlog_level = \"debug\"\n").unwrap();
        let config = CliConfig::load_or_default(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.histogram_width, 30);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            ("VARIATE_SEED", "7"),
            ("VARIATE_BINS", "12"),
            ("VARIATE_LOG_LEVEL", "WARN"),
        ]
        .into_iter()
        .collect();

        let config = CliConfig::default()
            .with_overrides(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.bins, 12);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_bad_env_seed_is_an_error() {
        let result = CliConfig::default().with_overrides(|key| {
            (key == "VARIATE_SEED").then(|| "minus one".to_string())
        });
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_validate_collects_all_problems() {
        let config = CliConfig {
            seed: None,
            bins: 0,
            histogram_width: 0,
            log_level: "loud".to_string(),
        };
        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("bins"));
        assert!(message.contains("histogram_width"));
        assert!(message.contains("log_level"));
    }
}
