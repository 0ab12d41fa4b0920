//! Configuration validation module
//!
//! Runs raw properties through a field schema and produces a validated
//! `Configuration`, either stopping at the first failure or collecting every
//! failure into one report.

use crate::config::app_config::ValidationMode;
use crate::domain::configuration::Configuration;
use crate::domain::properties::RawProperties;
use crate::domain::validation::{ConditionChecker, FieldSpec, FieldViolation, ValidationErrors};
use crate::shared::error::{AppError, AppResult};
use tracing::{debug, warn};

/// Validator applying field declarations to raw properties
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValidator {
    mode: ValidationMode,
}

impl ConfigValidator {
    /// Create a validator running in the given mode
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Validate properties against the schema, in schema order
    pub fn validate(&self, properties: &RawProperties, schema: &[FieldSpec]) -> AppResult<Configuration> {
        Self::log_undeclared(properties, schema);

        let result = match self.mode {
            ValidationMode::FailFast => Self::validate_fail_fast(properties, schema),
            ValidationMode::AggregateAll => Self::validate_aggregate(properties, schema),
        };

        if let Ok(configuration) = &result {
            debug!(fields = configuration.len(), "Configuration validated");
        }
        result
    }

    /// Check only the conditions of one field
    pub fn check_field(field: &FieldSpec, value: &str) -> Vec<String> {
        ConditionChecker::check_all(&field.conditions, &field.name, value)
    }

    fn validate_fail_fast(properties: &RawProperties, schema: &[FieldSpec]) -> AppResult<Configuration> {
        // Every required key is checked before any value
        if let Some(missing) = schema
            .iter()
            .find(|field| field.required && !properties.has_key(&field.name))
        {
            warn!(field = %missing.name, "Required property missing");
            return Err(AppError::MissingRequiredField { field: missing.name.clone() });
        }

        let mut configuration = Configuration::new();
        for field in schema {
            let Some(value) = properties.get(&field.name) else {
                debug!(field = %field.name, "Optional property absent");
                continue;
            };

            let violations = Self::check_field(field, value);
            if !violations.is_empty() {
                warn!(field = %field.name, violations = violations.len(), "Property failed validation");
                return Err(AppError::InvalidFieldValue {
                    field: field.name.clone(),
                    violations,
                });
            }

            configuration.insert(&field.name, value);
        }

        Ok(configuration)
    }

    fn validate_aggregate(properties: &RawProperties, schema: &[FieldSpec]) -> AppResult<Configuration> {
        let mut configuration = Configuration::new();
        let mut errors = ValidationErrors::new();

        for field in schema {
            match properties.get(&field.name) {
                None if field.required => {
                    let missing = AppError::MissingRequiredField { field: field.name.clone() };
                    errors.push(FieldViolation::new(&field.name, missing.to_string()));
                }
                None => debug!(field = %field.name, "Optional property absent"),
                Some(value) => {
                    let violations = Self::check_field(field, value);
                    if violations.is_empty() {
                        configuration.insert(&field.name, value);
                    } else {
                        errors.extend_field(&field.name, violations);
                    }
                }
            }
        }

        if !errors.is_empty() {
            warn!(
                problems = errors.len(),
                fields = ?errors.fields(),
                "Configuration failed validation"
            );
            return Err(AppError::Validation(errors));
        }

        Ok(configuration)
    }

    fn log_undeclared(properties: &RawProperties, schema: &[FieldSpec]) {
        for key in properties.keys() {
            if !schema.iter().any(|field| field.name == key) {
                debug!(key = %key, "Ignoring undeclared property");
            }
        }
    }
}
