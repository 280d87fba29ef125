//! Settings export and import
//!
//! - JSON: machine-readable, also accepts a bare settings object
//! - YAML: human-readable with a comment header

pub mod json;
pub mod yaml;

use std::path::Path;

pub use json::{export_settings_json, import_from_json, SettingsExport, EXPORT_SCHEMA_VERSION};
pub use yaml::{export_settings_yaml, import_from_yaml};

use crate::error::NotaResult;
use crate::models::Settings;

/// Serialization format for export files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    /// Guess the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ExportFormat::Yaml
            }
            _ => ExportFormat::Json,
        }
    }
}

/// Parse exported settings in the given format
pub fn import_settings(contents: &str, format: ExportFormat) -> NotaResult<Settings> {
    match format {
        ExportFormat::Json => import_from_json(contents),
        ExportFormat::Yaml => import_from_yaml(contents),
    }
}
