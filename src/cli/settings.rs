//! Settings CLI commands
//!
//! Show, edit, validate, export and import the settings object.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::display::{format_settings_details, format_validation_errors};
use crate::error::{FieldError, NotaError, NotaResult, ValidationErrors};
use crate::export::{export_settings_json, export_settings_yaml, import_settings, ExportFormat};
use crate::models::Money;
use crate::services::SettingsService;
use crate::storage::KeyValueStore;

/// Export file format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// JSON
    Json,
    /// YAML, human-readable
    Yaml,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ExportFormat::Json,
            FormatArg::Yaml => ExportFormat::Yaml,
        }
    }
}

/// Settings subcommands
#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Show the stored settings
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Change one or more fields
    Set {
        /// Recipient e-mail address
        #[arg(long)]
        email: Option<String>,
        /// Company name
        #[arg(long)]
        company: Option<String>,
        /// Subject template
        #[arg(long)]
        subject: Option<String>,
        /// Body template
        #[arg(long, conflicts_with = "body_file")]
        body: Option<String>,
        /// Read the body template from a file
        #[arg(long)]
        body_file: Option<PathBuf>,
        /// Salary (e.g. "5.000,00" or "5000")
        #[arg(long)]
        amount: Option<String>,
    },
    /// Check the stored settings for missing fields
    Validate,
    /// Export the settings to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format, guessed from the extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Import settings from an export file, replacing the stored settings
    Import {
        /// Input file path
        input: PathBuf,
        /// Input format, guessed from the extension when omitted
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },
}

/// Handle a settings command
pub fn handle_settings_command<S: KeyValueStore>(
    service: &mut SettingsService<S>,
    cmd: SettingsCommands,
) -> NotaResult<()> {
    match cmd {
        SettingsCommands::Show { json } => {
            let settings = service.load()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                print!("{}", format_settings_details(&settings));
            }
        }

        SettingsCommands::Set {
            email,
            company,
            subject,
            body,
            body_file,
            amount,
        } => {
            let body = resolve_body(body, body_file)?;
            let amount = amount.as_deref().map(parse_amount).transpose()?;

            if email.is_none()
                && company.is_none()
                && subject.is_none()
                && body.is_none()
                && amount.is_none()
            {
                println!("No changes specified. Use --help to see the available fields.");
                return Ok(());
            }

            service.update(|settings| {
                if let Some(email) = email {
                    settings.email = email;
                }
                if let Some(company) = company {
                    settings.company = company;
                }
                if let Some(subject) = subject {
                    settings.subject = subject;
                }
                if let Some(body) = body {
                    settings.body = body;
                }
                if amount.is_some() {
                    settings.amount = amount;
                }
                Ok(())
            })?;

            println!("Settings saved.");
        }

        SettingsCommands::Validate => {
            let errors = service.load()?.validation_errors();
            if errors.is_empty() {
                println!("Settings are valid.");
            } else {
                println!("Settings are incomplete:");
                print!("{}", format_validation_errors(&errors));
                return Err(NotaError::Validation(errors));
            }
        }

        SettingsCommands::Export { output, format } => {
            let format = format
                .map(ExportFormat::from)
                .unwrap_or_else(|| ExportFormat::from_path(&output));
            let settings = service.load()?;

            let file = File::create(&output).map_err(|e| {
                NotaError::Export(format!("Failed to create {}: {}", output.display(), e))
            })?;
            let mut writer = BufWriter::new(file);

            match format {
                ExportFormat::Json => export_settings_json(&settings, &mut writer, true)?,
                ExportFormat::Yaml => export_settings_yaml(&settings, &mut writer)?,
            }
            writer
                .flush()
                .map_err(|e| NotaError::Export(e.to_string()))?;

            println!("Exported settings to {}", output.display());
        }

        SettingsCommands::Import { input, format } => {
            let format = format
                .map(ExportFormat::from)
                .unwrap_or_else(|| ExportFormat::from_path(&input));
            let contents = fs::read_to_string(&input).map_err(|e| {
                NotaError::Import(format!("Failed to read {}: {}", input.display(), e))
            })?;

            let settings = import_settings(&contents, format)?;
            service.save(&settings)?;

            println!("Imported settings from {}", input.display());
        }
    }

    Ok(())
}

/// Body from `--body` as given, or from `--body-file` without the file's
/// trailing line breaks
fn resolve_body(body: Option<String>, body_file: Option<PathBuf>) -> NotaResult<Option<String>> {
    let Some(path) = body_file else {
        return Ok(body);
    };

    let contents = fs::read_to_string(&path)
        .map_err(|e| NotaError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(Some(contents.trim_end_matches(['\n', '\r']).to_string()))
}

/// Parse a salary argument, reporting a field error on bad input
fn parse_amount(input: &str) -> NotaResult<Money> {
    Money::parse(input).map_err(|_| {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::new(
            "amount",
            format!("is not a valid amount: {}", input.trim()),
        ));
        NotaError::Validation(errors)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_inline_body_kept_verbatim() {
        let body = resolve_body(Some("Olá,\n{SALARIO}\n\n".into()), None).unwrap();
        assert_eq!(body.as_deref(), Some("Olá,\n{SALARIO}\n\n"));
        assert_eq!(resolve_body(None, None).unwrap(), None);
    }

    #[test]
    fn test_body_file_drops_final_line_break() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("body.txt");
        fs::write(&path, "Olá,\n{CONTA_01}\n").unwrap();

        let body = resolve_body(None, Some(path)).unwrap();
        assert_eq!(body.as_deref(), Some("Olá,\n{CONTA_01}"));

        let missing = temp_dir.path().join("missing.txt");
        assert!(resolve_body(None, Some(missing)).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("5.000,00").unwrap(), Money::from_cents(500000));

        let err = parse_amount("cinco").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Validation error: amount is not a valid amount: cinco"
        );
    }
}
