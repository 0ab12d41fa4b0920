//! Field declaration tables, one module per configuration schema

pub mod password;
