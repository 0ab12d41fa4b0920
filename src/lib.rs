//! passforge - Declarative validation of password generator settings
//!
//! Raw `key=value` properties are loaded from a file, checked field by field
//! against a declared schema of conditions, and materialized into a validated
//! configuration, or rejected with every problem found.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use crate::application::LoadConfigurationUseCase;
pub use crate::config::{AppConfig, ConfigValidator, PasswordConfig, ValidationMode};
pub use crate::domain::{ConditionKind, Configuration, FieldRegistry, FieldSpec, RawProperties};
pub use crate::shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
