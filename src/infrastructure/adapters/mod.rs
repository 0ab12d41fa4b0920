//! Infrastructure adapters module
//!
//! This module contains adapters implementing domain ports.

pub mod file_source;

pub use file_source::{FilePropertySource, DEFAULT_PROPERTIES_PATH};
