//! Common test utilities and fixtures

use crate::{
    domain::properties::{PropertySource, RawProperties},
    shared::error::{AppError, AppResult},
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// In-memory property source returning a fixed result
pub struct StaticPropertySource {
    result: AppResult<RawProperties>,
}

impl StaticPropertySource {
    /// Source yielding the given pairs
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self {
            result: Ok(pairs.iter().copied().collect()),
        }
    }

    /// Source failing with the given error
    pub fn failing(err: AppError) -> Self {
        Self { result: Err(err) }
    }
}

impl PropertySource for StaticPropertySource {
    fn load(&self) -> AppResult<RawProperties> {
        self.result.clone()
    }

    fn describe(&self) -> String {
        "static".to_string()
    }
}

/// Temporary workspace holding a properties file and an output directory
pub struct PropertiesFixture {
    dir: TempDir,
}

impl PropertiesFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write `config.properties` and return its path
    pub fn write(&self, content: &str) -> PathBuf {
        self.write_named("config.properties", content)
    }

    pub fn write_named(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, content).expect("write fixture file");
        path
    }

    /// Existing directory suitable for OUT_DIRECTORY
    pub fn out_dir(&self) -> String {
        let out = self.dir.path().join("out");
        fs::create_dir_all(&out).expect("create out dir");
        out.to_str().expect("utf-8 temp path").to_string()
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
