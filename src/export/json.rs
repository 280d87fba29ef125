//! JSON export of the settings
//!
//! Besides its own export envelope, the JSON importer accepts a bare settings
//! object such as the value stored by the browser version of the tool.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{NotaError, NotaResult};
use crate::models::Settings;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Settings export envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The exported settings
    pub settings: Settings,
}

impl SettingsExport {
    /// Wrap settings for export
    pub fn new(settings: Settings) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings,
        }
    }

    /// Check the schema version
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }
        Ok(())
    }
}

/// Export settings to JSON
pub fn export_settings_json<W: Write>(
    settings: &Settings,
    writer: &mut W,
    pretty: bool,
) -> NotaResult<()> {
    let export = SettingsExport::new(settings.clone());

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| NotaError::Export(e.to_string()))?;

    Ok(())
}

/// Import settings from a JSON export or a bare settings object
pub fn import_from_json(json_str: &str) -> NotaResult<Settings> {
    let value: Value =
        serde_json::from_str(json_str).map_err(|e| NotaError::Import(e.to_string()))?;

    let is_wrapped = value
        .as_object()
        .is_some_and(|obj| obj.contains_key("schema_version") && obj.contains_key("settings"));

    if is_wrapped {
        let export: SettingsExport =
            serde_json::from_value(value).map_err(|e| NotaError::Import(e.to_string()))?;
        export.validate().map_err(NotaError::Import)?;
        Ok(export.settings)
    } else {
        serde_json::from_value(value).map_err(|e| NotaError::Import(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, PixEntry};

    fn sample() -> Settings {
        Settings {
            email: "rh@acme.com".into(),
            company: "Acme".into(),
            subject: "NF {MES}".into(),
            body: "{PIX_01}".into(),
            amount: Some(Money::from_cents(123450)),
            bank_accounts: Vec::new(),
            pix: vec![PixEntry::new("k", "Fulano", "Inter")],
        }
    }

    #[test]
    fn test_export_then_import() {
        let mut buffer = Vec::new();
        export_settings_json(&sample(), &mut buffer, true).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\"schema_version\": \"1.0.0\""));
        assert_eq!(import_from_json(&text).unwrap(), sample());
    }

    #[test]
    fn test_import_bare_browser_blob() {
        let blob = r#"{"email":"rh@acme.com","company":"Acme","amount":1234.5,"pix":[]}"#;
        let settings = import_from_json(blob).unwrap();
        assert_eq!(settings.company, "Acme");
        assert_eq!(settings.amount, Some(Money::from_cents(123450)));
    }

    #[test]
    fn test_import_rejects_other_schema() {
        let blob = r#"{"schema_version":"9.0.0","exported_at":"2024-07-01T00:00:00Z","app_version":"x","settings":{}}"#;
        let err = import_from_json(blob).unwrap_err();
        assert!(matches!(err, NotaError::Import(_)));
    }

    #[test]
    fn test_import_invalid_json() {
        assert!(import_from_json("not json").is_err());
    }
}
