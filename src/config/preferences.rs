//! Application preferences for minha-nota
//!
//! Preferences are separate from the billing settings: they tune how the tool
//! behaves (fallback text, copy feedback, storage key) rather than what it renders.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::NotaPaths;
use crate::error::NotaError;

/// Text rendered in place of `{EMPRESA}` when no company is configured
pub const DEFAULT_COMPANY_FALLBACK: &str = "<SEU_NOME>";

/// Key under which the settings blob is stored
pub const DEFAULT_STORAGE_KEY: &str = "minha-nota:settings";

/// Longest copy feedback window honoured, whatever the preferences file says
pub const MAX_COPY_FEEDBACK_MS: u64 = 10_000;

/// User preferences for minha-nota
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Replacement for `{EMPRESA}` when the company is empty
    #[serde(default = "default_company_fallback")]
    pub company_fallback: String,

    /// How long a copy action stays in the "copied" state, in milliseconds
    #[serde(default = "default_copy_feedback_ms")]
    pub copy_feedback_ms: u64,

    /// Namespaced key of the settings blob in the key-value store
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_company_fallback() -> String {
    DEFAULT_COMPANY_FALLBACK.to_string()
}

fn default_copy_feedback_ms() -> u64 {
    1000
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            company_fallback: default_company_fallback(),
            copy_feedback_ms: default_copy_feedback_ms(),
            storage_key: default_storage_key(),
        }
    }
}

impl Preferences {
    /// The copy feedback window as a Duration, capped at `MAX_COPY_FEEDBACK_MS`
    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms.min(MAX_COPY_FEEDBACK_MS))
    }

    /// Load preferences from disk, or defaults if the file doesn't exist
    pub fn load_or_create(paths: &NotaPaths) -> Result<Self, NotaError> {
        let path = paths.preferences_file();

        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| NotaError::Io(format!("Failed to read preferences file: {}", e)))?;

            let preferences: Preferences = serde_json::from_str(&contents).map_err(|e| {
                NotaError::Config(format!("Failed to parse preferences file: {}", e))
            })?;

            Ok(preferences)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Preferences::default())
        }
    }

    /// Save preferences to disk
    pub fn save(&self, paths: &NotaPaths) -> Result<(), NotaError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| NotaError::Config(format!("Failed to serialize preferences: {}", e)))?;

        std::fs::write(paths.preferences_file(), contents)
            .map_err(|e| NotaError::Io(format!("Failed to write preferences file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.company_fallback, "<SEU_NOME>");
        assert_eq!(prefs.copy_feedback(), Duration::from_secs(1));
        assert_eq!(prefs.storage_key, "minha-nota:settings");
    }

    #[test]
    fn test_load_missing_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NotaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let prefs = Preferences::load_or_create(&paths).unwrap();
        assert_eq!(prefs, Preferences::default());
        assert!(!paths.preferences_file().exists());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NotaPaths::with_base_dir(temp_dir.path().to_path_buf());

        let prefs = Preferences {
            company_fallback: "<EMPRESA>".into(),
            copy_feedback_ms: 500,
            ..Preferences::default()
        };
        prefs.save(&paths).unwrap();

        let loaded = Preferences::load_or_create(&paths).unwrap();
        assert_eq!(loaded, prefs);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = NotaPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.preferences_file(), r#"{"copy_feedback_ms": 250}"#).unwrap();

        let loaded = Preferences::load_or_create(&paths).unwrap();
        assert_eq!(loaded.copy_feedback_ms, 250);
        assert_eq!(loaded.company_fallback, DEFAULT_COMPANY_FALLBACK);
    }

    #[test]
    fn test_copy_feedback_is_capped() {
        let prefs = Preferences {
            copy_feedback_ms: u64::MAX,
            ..Preferences::default()
        };
        assert_eq!(
            prefs.copy_feedback(),
            Duration::from_millis(MAX_COPY_FEEDBACK_MS)
        );
    }
}
