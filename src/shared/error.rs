//! Error handling module
//!
//! This module provides centralized error handling for the application.

use crate::domain::validation::ValidationErrors;
use serde_json::{json, Value};
use std::path::PathBuf;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Failed to find the configuration file at {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Failed to load the configuration file at {}: {reason}", .path.display())]
    SourceUnreadable { path: PathBuf, reason: String },

    #[error("Expected property {field}")]
    MissingRequiredField { field: String },

    #[error("Property {field} is invalid. {}", .violations.join(" "))]
    InvalidFieldValue { field: String, violations: Vec<String> },

    #[error("Configuration validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Duplicate field declaration: {field}")]
    DuplicateField { field: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings validation failed: {0}")]
    Settings(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable tag identifying the error variant
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::SourceNotFound { .. } => "source_not_found",
            AppError::SourceUnreadable { .. } => "source_unreadable",
            AppError::MissingRequiredField { .. } => "missing_required_field",
            AppError::InvalidFieldValue { .. } => "invalid_field_value",
            AppError::Validation(_) => "validation",
            AppError::DuplicateField { .. } => "duplicate_field",
            AppError::Config(_) => "config",
            AppError::Settings(_) => "settings",
            AppError::Internal(_) => "internal",
        }
    }

    /// Name of the offending field, when the error concerns a single one
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::MissingRequiredField { field }
            | AppError::InvalidFieldValue { field, .. }
            | AppError::DuplicateField { field } => Some(field.as_str()),
            _ => None,
        }
    }

    /// Render the error as a JSON report
    pub fn to_report(&self) -> Value {
        let mut error = json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });

        if let Some(field) = self.field() {
            error["field"] = json!(field);
        }

        match self {
            AppError::InvalidFieldValue { violations, .. } => {
                error["violations"] = json!(violations);
            }
            AppError::Validation(errors) => {
                error["violations"] = json!(errors.violations());
            }
            _ => {}
        }

        json!({ "error": error })
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Settings(err.to_string())
    }
}
