//! Application layer - Use cases
//!
//! This module orchestrates domain logic for the configuration loading flow.

pub mod use_cases;

pub use use_cases::*;
