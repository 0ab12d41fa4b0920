//! File-backed property source
//!
//! Reads a `config.properties`-style file in one blocking call and parses it
//! into an immutable `RawProperties` map.

use crate::domain::properties::{PropertySource, RawProperties};
use crate::shared::error::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default relative location of the properties file
pub const DEFAULT_PROPERTIES_PATH: &str = "config.properties";

/// Property source reading a properties file from disk
#[derive(Debug, Clone)]
pub struct FilePropertySource {
    path: PathBuf,
}

impl FilePropertySource {
    /// Create a source for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unreadable(&self, reason: impl Into<String>) -> AppError {
        AppError::SourceUnreadable {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

impl Default for FilePropertySource {
    fn default() -> Self {
        Self::new(DEFAULT_PROPERTIES_PATH)
    }
}

impl PropertySource for FilePropertySource {
    fn load(&self) -> AppResult<RawProperties> {
        debug!(path = %self.path.display(), "Reading properties file");

        let bytes = fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AppError::SourceNotFound { path: self.path.clone() },
            _ => self.unreadable(e.to_string()),
        })?;

        let content = String::from_utf8(bytes)
            .map_err(|e| self.unreadable(format!("invalid UTF-8: {}", e)))?;

        let properties = RawProperties::parse(&content).map_err(|e| self.unreadable(e.to_string()))?;

        info!(
            path = %self.path.display(),
            keys = properties.len(),
            "Properties file loaded"
        );

        Ok(properties)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
