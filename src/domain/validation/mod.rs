//! Domain validation module
//!
//! Declarative field schemas and the condition checks applied to raw
//! property values.

pub mod checker;
pub mod fields;
pub mod registry;
pub mod types;

pub use checker::ConditionChecker;
pub use registry::FieldRegistry;
pub use types::{ConditionKind, FieldSpec, FieldViolation, ValidationErrors};
