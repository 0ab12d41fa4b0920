//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use crate::config::{LogFormat, LoggingConfig, PasswordConfig};
use crate::shared::error::AppError;
use tracing::{error, info};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(config: &LoggingConfig) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .map_err(|e| AppError::Settings(format!("Invalid log level '{}': {}", config.level, e)))?;

        let subscriber_builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let installed = match config.format {
            LogFormat::Text => tracing::subscriber::set_global_default(subscriber_builder.finish()),
            LogFormat::Compact => {
                tracing::subscriber::set_global_default(subscriber_builder.compact().finish())
            }
        };

        installed.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))?;

        Ok(())
    }

    /// Log a failed load or validation
    pub fn log_validation_failure(source: &str, err: &AppError) {
        error!(
            source = %source,
            kind = err.kind(),
            field = err.field(),
            error = %err,
            "Configuration rejected"
        );
    }

    /// Log the settings handed to the generator
    pub fn log_password_config(config: &PasswordConfig) {
        info!(
            password_length = config.password_length,
            number_of_passwords = config.number_of_passwords,
            out_directory = %config.out_directory.display(),
            out_file = config.out_file.as_deref(),
            export = config.export_enabled(),
            classes = ?config.character_classes(),
            "Configuration accepted"
        );
    }
}
