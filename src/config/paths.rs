//! Path management for minha-nota
//!
//! ## Path Resolution Order
//!
//! 1. `MINHA_NOTA_DATA_DIR` environment variable (if set)
//! 2. The platform config directory for `minha-nota`
//!    (`~/.config/minha-nota` on Linux, `%APPDATA%\minha-nota\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::NotaError;

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "MINHA_NOTA_DATA_DIR";

/// Manages all paths used by minha-nota
#[derive(Debug, Clone)]
pub struct NotaPaths {
    /// Base directory for all minha-nota data
    base_dir: PathBuf,
}

impl NotaPaths {
    /// Create a new NotaPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, NotaError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create NotaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Path to the preferences file
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Path to the key-value store holding the settings blob
    pub fn storage_file(&self) -> PathBuf {
        self.base_dir.join("storage.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), NotaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| NotaError::Io(format!("Failed to create base directory: {}", e)))
    }
}

fn resolve_default_path() -> Result<PathBuf, NotaError> {
    ProjectDirs::from("", "", "minha-nota")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| NotaError::Config("Could not determine a home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NotaPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.storage_file(), temp_dir.path().join("storage.json"));
        assert_eq!(paths.preferences_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("minha-nota");
        let paths = NotaPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();

        assert!(base.is_dir());
    }
}
