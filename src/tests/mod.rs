//! Test suite for passforge
//!
//! Shared fixtures plus end-to-end scenarios exercising the file source,
//! the password schema and both validation modes together.

pub mod common;
pub mod integration;

/// Test environment setup
pub mod config {
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize tracing for tests
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }
}
