//! Domain layer - Core configuration model and validation rules
//!
//! This module contains the field schema, condition checks and the raw and
//! validated property models, independent of where properties are stored.

pub mod charset;
pub mod configuration;
pub mod properties;
pub mod validation;

pub use charset::CharacterClass;
pub use configuration::Configuration;
pub use properties::{PropertySource, RawProperties};
pub use validation::{
    ConditionChecker, ConditionKind, FieldRegistry, FieldSpec, FieldViolation, ValidationErrors,
};
