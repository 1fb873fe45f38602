//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, RatesConfig, ThresholdsConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rates.yaml       # Rate buckets, named overrides, fallback target
/// └── thresholds.yaml  # Report minimum length, project keywords
/// ```
///
/// # Example
///
/// ```no_run
/// use activity_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Report minimum: {} chars", loader.config().report_min_chars());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The values are inconsistent (see [`ConfigLoader::validate`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<RatesConfig>(&path.join("rates.yaml"))?;
        let thresholds = Self::load_yaml::<ThresholdsConfig>(&path.join("thresholds.yaml"))?;

        let config = EngineConfig::new(rates, thresholds);
        Self::validate(&config)?;

        info!(
            path = %path.display(),
            buckets = config.rates().buckets.len(),
            named_overrides = config.rates().named_overrides.len(),
            report_min_chars = config.thresholds().report.min_chars,
            project_keywords = ?config.thresholds().project.keywords,
            "Loaded engine configuration"
        );

        Ok(Self { config })
    }

    /// Creates a loader holding the built-in defaults.
    pub fn builtin() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks the loaded values for consistency.
    ///
    /// Buckets must exist and carry non-negative rates and positive targets,
    /// named and fallback targets must be positive, the report minimum must
    /// be at least one character and at least one project keyword must
    /// remain after normalization.
    pub fn validate(config: &EngineConfig) -> EngineResult<()> {
        let rates = config.rates();

        if rates.buckets.is_empty() {
            return Err(invalid("rate buckets must not be empty"));
        }

        for bucket in &rates.buckets {
            if bucket.min_rate < Decimal::ZERO {
                return Err(invalid(format!(
                    "bucket min_rate {} must not be negative",
                    bucket.min_rate
                )));
            }
            if bucket.target_hours <= Decimal::ZERO {
                return Err(invalid(format!(
                    "bucket for rate {} must have positive target_hours",
                    bucket.min_rate
                )));
            }
        }

        for named in &rates.named_overrides {
            if named.name.trim().is_empty() {
                return Err(invalid("named override must have a name"));
            }
            if named.target_hours <= Decimal::ZERO {
                return Err(invalid(format!(
                    "named override '{}' must have positive target_hours",
                    named.name
                )));
            }
        }

        if let Some(fallback) = rates.fallback_hours {
            if fallback <= Decimal::ZERO {
                return Err(invalid("fallback_hours must be positive when set"));
            }
        }

        if config.report_min_chars() == 0 {
            return Err(invalid("report.min_chars must be at least 1"));
        }

        if config.project_keywords().is_empty() {
            return Err(invalid("project.keywords must not be empty"));
        }

        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> EngineConfig {
        self.config
    }
}

fn invalid(message: impl Into<String>) -> EngineError {
    EngineError::InvalidConfig {
        message: message.into(),
    }
}
