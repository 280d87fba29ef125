//! YAML export of the settings
//!
//! A human-editable alternative to JSON; multi-line templates read naturally
//! as YAML block scalars.

use std::io::Write;

use crate::error::{NotaError, NotaResult};
use crate::export::json::SettingsExport;
use crate::models::Settings;

/// Export settings to YAML with a comment header
pub fn export_settings_yaml<W: Write>(settings: &Settings, writer: &mut W) -> NotaResult<()> {
    let export = SettingsExport::new(settings.clone());

    writeln!(writer, "# minha-nota settings export")
        .map_err(|e| NotaError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| NotaError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| NotaError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| NotaError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| NotaError::Export(e.to_string()))?;

    Ok(())
}

/// Import settings from a YAML export
pub fn import_from_yaml(yaml_str: &str) -> NotaResult<Settings> {
    let export: SettingsExport =
        serde_yaml::from_str(yaml_str).map_err(|e| NotaError::Import(e.to_string()))?;

    export.validate().map_err(NotaError::Import)?;

    Ok(export.settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankAccount, Money};

    #[test]
    fn test_yaml_export_and_import() {
        let settings = Settings {
            email: "rh@acme.com".into(),
            company: "Acme".into(),
            subject: "Recibo {MES}/{ANO}".into(),
            body: "Olá,\n\nSegue {SALARIO}.\n{CONTA_01}".into(),
            amount: Some(Money::from_cents(99990)),
            bank_accounts: vec![BankAccount::new("Itaú", "0001", "12345-6")],
            pix: Vec::new(),
        };

        let mut buffer = Vec::new();
        export_settings_yaml(&settings, &mut buffer).unwrap();
        let yaml = String::from_utf8(buffer).unwrap();

        assert!(yaml.starts_with("# minha-nota settings export"));
        assert!(yaml.contains("company: Acme"));
        assert_eq!(import_from_yaml(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_yaml_import_garbage() {
        assert!(import_from_yaml("- just\n- a list").is_err());
    }
}
