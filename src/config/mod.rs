//! Configuration management module
//!
//! This module handles all configuration concerns: runtime settings,
//! validation of the generator properties, and their typed view.

pub mod app_config;
pub mod password_config;
pub mod validation;

pub use app_config::{AppConfig, LogFormat, LoggingConfig, ValidationConfig, ValidationMode};
pub use password_config::PasswordConfig;
pub use validation::ConfigValidator;
