//! Condition checks applied to raw property values

use super::types::ConditionKind;
use std::path::Path;

/// Stateless checker for individual conditions
pub struct ConditionChecker;

impl ConditionChecker {
    /// Check one condition, returning the violation messages (empty when valid)
    pub fn check(kind: ConditionKind, field_name: &str, value: &str) -> Vec<String> {
        let satisfied = match kind {
            ConditionKind::NotNull => !value.is_empty(),
            ConditionKind::NotBlank => !value.trim().is_empty(),
            ConditionKind::Integer => value.parse::<i32>().is_ok(),
            ConditionKind::Boolean => Self::parse_boolean(value).is_some(),
            ConditionKind::Directory => !value.is_empty() && Path::new(value).is_dir(),
            ConditionKind::File => !value.is_empty() && Path::new(value).is_file(),
        };

        if satisfied {
            Vec::new()
        } else {
            vec![Self::message(kind, field_name)]
        }
    }

    /// Check every condition in order and concatenate the messages
    pub fn check_all(conditions: &[ConditionKind], field_name: &str, value: &str) -> Vec<String> {
        conditions
            .iter()
            .flat_map(|kind| Self::check(*kind, field_name, value))
            .collect()
    }

    /// Case-insensitive `true`/`false`
    pub fn parse_boolean(value: &str) -> Option<bool> {
        if value.eq_ignore_ascii_case("true") {
            Some(true)
        } else if value.eq_ignore_ascii_case("false") {
            Some(false)
        } else {
            None
        }
    }

    fn message(kind: ConditionKind, field_name: &str) -> String {
        let expectation = match kind {
            ConditionKind::NotNull => "not to be null",
            ConditionKind::NotBlank => "not to be blank",
            ConditionKind::Integer => "to be an integer",
            ConditionKind::Boolean => "to be a boolean",
            ConditionKind::Directory => "to be a directory",
            ConditionKind::File => "to be a file",
        };
        format!("Expected property {} {}.", field_name, expectation)
    }
}
