use crate::domain::validation::registry::FieldRegistry;
use crate::domain::validation::types::{ConditionKind, FieldSpec};
use crate::shared::error::AppResult;

pub const PASSWORD_LENGTH: &str = "PASSWORD_LENGTH";
pub const NUMBER_OF_PASSWORDS: &str = "NUMBER_OF_PASSWORDS";
pub const OUT_DIRECTORY: &str = "OUT_DIRECTORY";
pub const OUT_FILE: &str = "OUT_FILE";
pub const DO_EXPORT: &str = "doExport";
pub const LOWER_CASE: &str = "LOWER_CASE";
pub const UPPER_CASE: &str = "UPPER_CASE";
pub const DIGITS: &str = "DIGITS";
pub const SYMBOLS: &str = "SYMBOLS";

pub fn register_password_fields(registry: &mut FieldRegistry) -> AppResult<()> {
    registry.register_field(FieldSpec::required(PASSWORD_LENGTH, vec![ConditionKind::Integer]))?;

    registry.register_field(FieldSpec::required(NUMBER_OF_PASSWORDS, vec![ConditionKind::Integer]))?;

    registry.register_field(FieldSpec::required(
        OUT_DIRECTORY,
        vec![ConditionKind::Directory, ConditionKind::NotBlank],
    ))?;

    registry.register_field(FieldSpec::optional(OUT_FILE, vec![ConditionKind::NotBlank]))?;

    registry.register_field(FieldSpec::optional(DO_EXPORT, vec![ConditionKind::Boolean]))?;

    // Character classes fed to the generator
    for name in [LOWER_CASE, UPPER_CASE, DIGITS, SYMBOLS] {
        registry.register_field(FieldSpec::optional(name, vec![ConditionKind::Boolean]))?;
    }

    Ok(())
}
