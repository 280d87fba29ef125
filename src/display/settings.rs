//! Settings display formatting
//!
//! Formats the settings, their positional entries and rendered messages for
//! terminal output.

use crate::error::ValidationErrors;
use crate::models::bank_account::BANK_ACCOUNT_TOKEN_PREFIX;
use crate::models::pix::PIX_TOKEN_PREFIX;
use crate::models::{BankAccount, PixEntry, Settings};
use crate::template::{positional_token, RenderedMessage};

/// Format the whole settings object
pub fn format_settings_details(settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("E-mail:  {}\n", or_unset(&settings.email)));
    output.push_str(&format!("Company: {}\n", or_unset(&settings.company)));
    output.push_str(&format!(
        "Salary:  {}\n",
        settings
            .amount
            .map(|amount| amount.to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    ));
    output.push_str(&format!("Subject: {}\n", or_unset(&settings.subject)));
    output.push('\n');
    output.push_str("Body:\n");
    if settings.body.is_empty() {
        output.push_str("  (not set)\n");
    } else {
        for line in settings.body.lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output.push('\n');
    output.push_str("Bank accounts:\n");
    output.push_str(&format_bank_account_list(&settings.bank_accounts));
    output.push('\n');
    output.push_str("PIX:\n");
    output.push_str(&format_pix_list(&settings.pix));

    output
}

/// Format bank accounts as a table with their tokens
pub fn format_bank_account_list(accounts: &[BankAccount]) -> String {
    if accounts.is_empty() {
        return "  No bank accounts.\n".to_string();
    }

    let rows: Vec<[String; 4]> = accounts
        .iter()
        .enumerate()
        .map(|(i, a)| {
            [
                format!("{{{}}}", positional_token(BANK_ACCOUNT_TOKEN_PREFIX, i + 1)),
                a.name.clone(),
                a.agency.clone(),
                a.number.clone(),
            ]
        })
        .collect();

    format_table(["Token", "Institution", "Agency", "Number"], &rows)
}

/// Format PIX entries as a table with their tokens
pub fn format_pix_list(entries: &[PixEntry]) -> String {
    if entries.is_empty() {
        return "  No PIX entries.\n".to_string();
    }

    let rows: Vec<[String; 4]> = entries
        .iter()
        .enumerate()
        .map(|(i, p)| {
            [
                format!("{{{}}}", positional_token(PIX_TOKEN_PREFIX, i + 1)),
                p.key.clone(),
                p.owner.clone(),
                p.bank.clone(),
            ]
        })
        .collect();

    format_table(["Token", "Key", "Owner", "Institution"], &rows)
}

/// Format validation errors one per line
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut output = String::new();
    for error in errors.iter() {
        output.push_str(&format!("  - {}\n", error));
    }
    output
}

/// Format a rendered message with labelled fields
pub fn format_rendered_message(message: &RenderedMessage) -> String {
    format!(
        "To:      {}\nSubject: {}\n\n{}\n",
        message.email, message.subject, message.body
    )
}

fn or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(not set)"
    } else {
        value
    }
}

fn format_table(headers: [&str; 4], rows: &[[String; 4]]) -> String {
    let mut widths = headers.map(|h| h.chars().count());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &headers.map(str::to_string), &widths);
    push_row(&mut output, &widths.map(|w| "-".repeat(w)), &widths);
    for row in rows {
        push_row(&mut output, row, &widths);
    }
    output
}

fn push_row(output: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    output.push(' ');
    for (cell, width) in cells.iter().zip(widths) {
        let padding = width.saturating_sub(cell.chars().count());
        output.push(' ');
        output.push_str(cell);
        output.push_str(&" ".repeat(padding + 1));
    }
    let trimmed_len = output.trim_end().len();
    output.truncate(trimmed_len);
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::models::Money;

    #[test]
    fn test_bank_account_table_shows_tokens() {
        let accounts = vec![
            BankAccount::new("Nubank", "0001", "123-4"),
            BankAccount::new("Itaú", "0002", "567-8"),
        ];

        let table = format_bank_account_list(&accounts);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Token"));
        assert!(lines[2].starts_with("  {CONTA_01}"));
        assert!(lines[3].contains("Itaú"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_pix_list(&[]), "  No PIX entries.\n");
        assert_eq!(format_bank_account_list(&[]), "  No bank accounts.\n");
    }

    #[test]
    fn test_settings_details() {
        let settings = Settings {
            company: "Acme".into(),
            amount: Some(Money::from_cents(123450)),
            body: "linha 1\nlinha 2".into(),
            ..Settings::default()
        };

        let text = format_settings_details(&settings);
        assert!(text.contains("E-mail:  (not set)"));
        assert!(text.contains("Salary:  R$ 1.234,50"));
        assert!(text.contains("  linha 2\n"));
    }

    #[test]
    fn test_validation_errors_listing() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::required("email"));
        assert_eq!(format_validation_errors(&errors), "  - email is required\n");
    }
}
