//! Application runtime settings
//!
//! Where to find the properties file, how to validate it and how to log.
//! Layered from defaults, an optional `passforge` settings file and
//! `PASSFORGE__*` environment variables.

use crate::infrastructure::adapters::file_source::DEFAULT_PROPERTIES_PATH;
use crate::shared::error::AppError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::{Validate, ValidationError};

/// Base name of the optional settings file (any format the config crate reads)
pub const SETTINGS_FILE: &str = "passforge";

/// Environment variable prefix for settings overrides
pub const ENV_PREFIX: &str = "PASSFORGE";

/// How validation failures are collected
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Stop at the first missing or invalid field
    #[default]
    FailFast,
    /// Report every missing and invalid field at once
    AggregateAll,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Compact,
}

/// Validation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ValidationConfig {
    /// Failure collection mode
    pub mode: ValidationMode,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level or filter directive, overridden by RUST_LOG
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AppConfig {
    /// Properties file holding the generator settings
    #[validate(custom(function = "validate_properties_path"))]
    pub properties_path: PathBuf,

    /// Validation configuration
    #[validate(nested)]
    pub validation: ValidationConfig,

    /// Logging configuration
    #[validate(nested)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            properties_path: PathBuf::from(DEFAULT_PROPERTIES_PATH),
            validation: ValidationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the optional settings file and environment variables
    pub fn load() -> crate::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(SETTINGS_FILE).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

        Self::from_builder(builder)
    }

    /// Load configuration from an explicit settings file
    pub fn load_file(path: &Path) -> crate::Result<Self> {
        let builder = config::Config::builder().add_source(config::File::from(path));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> crate::Result<Self> {
        let config = builder
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate()?;

        Ok(config)
    }
}

fn validate_properties_path(path: &Path) -> Result<(), ValidationError> {
    if path.as_os_str().is_empty() {
        return Err(ValidationError::new("empty_properties_path"));
    }
    Ok(())
}
