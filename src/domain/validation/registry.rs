use super::fields::password::register_password_fields;
use super::types::FieldSpec;
use crate::shared::error::{AppError, AppResult};

/// Ordered registry of field declarations forming a configuration schema
#[derive(Debug, Clone, Default)]
pub struct FieldRegistry {
    pub(crate) fields: Vec<FieldSpec>,
}

impl FieldRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Registry holding the password generator schema
    pub fn password_fields() -> AppResult<Self> {
        let mut registry = Self::new();
        register_password_fields(&mut registry)?;
        Ok(registry)
    }

    /// Register a field declaration, rejecting duplicate names
    pub fn register_field(&mut self, field: FieldSpec) -> AppResult<()> {
        if self.get_field(&field.name).is_some() {
            return Err(AppError::DuplicateField { field: field.name });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Get a field declaration by name
    pub fn get_field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Declarations in registration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
