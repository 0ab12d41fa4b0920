//! Typed password generator settings
//!
//! Converts a validated `Configuration` into typed values once, so that
//! consumers never re-parse raw strings.

use crate::domain::charset::{combined_alphabet, CharacterClass};
use crate::domain::configuration::Configuration;
use crate::domain::validation::fields::password::{
    DIGITS, DO_EXPORT, LOWER_CASE, NUMBER_OF_PASSWORDS, OUT_DIRECTORY, OUT_FILE, PASSWORD_LENGTH,
    SYMBOLS, UPPER_CASE,
};
use crate::domain::validation::{ConditionChecker, ConditionKind};
use crate::shared::error::{AppError, AppResult};
use serde::Serialize;
use std::path::PathBuf;

/// Password generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordConfig {
    /// Characters per password
    pub password_length: i32,

    /// Passwords to generate
    pub number_of_passwords: i32,

    /// Directory receiving exported passwords
    pub out_directory: PathBuf,

    /// Output file name, stdout when absent
    pub out_file: Option<String>,

    pub do_export: Option<bool>,
    pub lower_case: Option<bool>,
    pub upper_case: Option<bool>,
    pub digits: Option<bool>,
    pub symbols: Option<bool>,
}

impl PasswordConfig {
    /// Build typed settings from a validated configuration
    pub fn from_configuration(configuration: &Configuration) -> AppResult<Self> {
        Ok(Self {
            password_length: parse_integer(PASSWORD_LENGTH, required(configuration, PASSWORD_LENGTH)?)?,
            number_of_passwords: parse_integer(
                NUMBER_OF_PASSWORDS,
                required(configuration, NUMBER_OF_PASSWORDS)?,
            )?,
            out_directory: PathBuf::from(required(configuration, OUT_DIRECTORY)?),
            out_file: configuration.get(OUT_FILE).map(str::to_string),
            do_export: optional_boolean(configuration, DO_EXPORT)?,
            lower_case: optional_boolean(configuration, LOWER_CASE)?,
            upper_case: optional_boolean(configuration, UPPER_CASE)?,
            digits: optional_boolean(configuration, DIGITS)?,
            symbols: optional_boolean(configuration, SYMBOLS)?,
        })
    }

    /// Enabled character classes; every class when none is enabled
    pub fn character_classes(&self) -> Vec<CharacterClass> {
        let selected: Vec<CharacterClass> = [
            (CharacterClass::LowerCase, self.lower_case),
            (CharacterClass::UpperCase, self.upper_case),
            (CharacterClass::Digits, self.digits),
            (CharacterClass::Symbols, self.symbols),
        ]
        .into_iter()
        .filter(|(_, enabled)| *enabled == Some(true))
        .map(|(class, _)| class)
        .collect();

        if selected.is_empty() {
            CharacterClass::ALL.to_vec()
        } else {
            selected
        }
    }

    /// Alphabet handed to the generator
    pub fn alphabet(&self) -> String {
        combined_alphabet(&self.character_classes())
    }

    pub fn export_enabled(&self) -> bool {
        self.do_export.unwrap_or(false)
    }
}

impl TryFrom<&Configuration> for PasswordConfig {
    type Error = AppError;

    fn try_from(configuration: &Configuration) -> AppResult<Self> {
        Self::from_configuration(configuration)
    }
}

fn required<'a>(configuration: &'a Configuration, field: &str) -> AppResult<&'a str> {
    configuration
        .get(field)
        .ok_or_else(|| AppError::MissingRequiredField { field: field.to_string() })
}

fn parse_integer(field: &str, value: &str) -> AppResult<i32> {
    value.parse().map_err(|_| AppError::InvalidFieldValue {
        field: field.to_string(),
        violations: ConditionChecker::check(ConditionKind::Integer, field, value),
    })
}

fn optional_boolean(configuration: &Configuration, field: &str) -> AppResult<Option<bool>> {
    configuration
        .get(field)
        .map(|value| {
            ConditionChecker::parse_boolean(value).ok_or_else(|| AppError::InvalidFieldValue {
                field: field.to_string(),
                violations: ConditionChecker::check(ConditionKind::Boolean, field, value),
            })
        })
        .transpose()
}
