use serde::{Deserialize, Serialize};
use std::fmt;

/// Declarative description of one configuration field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Property key, unique within a schema
    pub name: String,

    /// Whether the key must be present in the property source
    pub required: bool,

    /// Conditions checked in order against the raw value
    pub conditions: Vec<ConditionKind>,
}

impl FieldSpec {
    /// Declare a field that must be present
    pub fn required(name: impl Into<String>, conditions: Vec<ConditionKind>) -> Self {
        Self { name: name.into(), required: true, conditions }
    }

    /// Declare a field that may be omitted
    pub fn optional(name: impl Into<String>, conditions: Vec<ConditionKind>) -> Self {
        Self { name: name.into(), required: false, conditions }
    }
}

/// Condition kinds applicable to a raw property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionKind {
    NotNull,
    NotBlank,
    #[serde(alias = "INT")]
    Integer,
    Boolean,
    Directory,
    File,
}

/// A single violation attributed to a field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)
    }
}

/// Violations accumulated across a whole validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.violations.push(violation);
    }

    /// Record every message for one field
    pub fn extend_field(&mut self, field: &str, messages: Vec<String>) {
        self.violations
            .extend(messages.into_iter().map(|message| FieldViolation::new(field, message)));
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Distinct field names in first-seen order
    pub fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = Vec::new();
        for violation in &self.violations {
            if !fields.contains(&violation.field.as_str()) {
                fields.push(&violation.field);
            }
        }
        fields
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} problem(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}
