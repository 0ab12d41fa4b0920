//! Infrastructure layer - External concerns and adapters
//!
//! This module contains adapters for the stores configuration is read from.

pub mod adapters;

pub use adapters::FilePropertySource;
