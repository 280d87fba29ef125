//! Template renderer
//!
//! Resolves the subject and body templates of a [`Settings`] value against a
//! reference date. Rendering is pure and infallible: missing data becomes an
//! empty substitution or leaves the token in place.
//!
//! Date and salary tokens only replace their first occurrence, while the
//! positional `{CONTA_NN}` and `{PIX_NN}` tokens replace every occurrence.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::calendar::{month_name, year_label};
use super::token::{positional_token, token_names, Segment, Tokenizer};
use crate::config::preferences::DEFAULT_COMPANY_FALLBACK;
use crate::models::bank_account::BANK_ACCOUNT_TOKEN_PREFIX;
use crate::models::pix::PIX_TOKEN_PREFIX;
use crate::models::Settings;

pub const MONTH_TOKEN: &str = "MES";
pub const YEAR_TOKEN: &str = "ANO";
pub const COMPANY_TOKEN: &str = "EMPRESA";
pub const SALARY_TOKEN: &str = "SALARIO";

/// How many occurrences of a token a substitution replaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    First,
    Every,
}

#[derive(Debug, Clone)]
struct Substitution {
    value: String,
    occurrence: Occurrence,
}

/// Lookup table from token name to replacement value
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    entries: HashMap<String, Substitution>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace only the first occurrence of `name`
    pub fn first(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(name.into(), value.into(), Occurrence::First)
    }

    /// Replace every occurrence of `name`
    pub fn every(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(name.into(), value.into(), Occurrence::Every)
    }

    fn insert(&mut self, name: String, value: String, occurrence: Occurrence) -> &mut Self {
        self.entries.insert(name, Substitution { value, occurrence });
        self
    }

    /// Substitute tokens in a template. Replacement values are not rescanned.
    pub fn apply(&self, template: &str) -> String {
        let mut output = String::with_capacity(template.len());
        let mut consumed: HashSet<&str> = HashSet::new();

        for segment in Tokenizer::new(template) {
            match segment {
                Segment::Literal(text) => output.push_str(text),
                Segment::Token { name, raw } => match self.entries.get(name) {
                    Some(sub) if sub.occurrence == Occurrence::Every => output.push_str(&sub.value),
                    Some(sub) if consumed.insert(name) => output.push_str(&sub.value),
                    _ => output.push_str(raw),
                },
            }
        }

        output
    }
}

/// Which rendered field to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageField {
    Email,
    Subject,
    Body,
}

impl fmt::Display for MessageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageField::Email => write!(f, "email"),
            MessageField::Subject => write!(f, "subject"),
            MessageField::Body => write!(f, "body"),
        }
    }
}

/// A fully resolved message, ready to display or copy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedMessage {
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl RenderedMessage {
    /// Text of a single field
    pub fn field(&self, field: MessageField) -> &str {
        match field {
            MessageField::Email => &self.email,
            MessageField::Subject => &self.subject,
            MessageField::Body => &self.body,
        }
    }

    /// Tokens still present in the subject or body, without duplicates
    pub fn unresolved_tokens(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        token_names(&self.subject)
            .chain(token_names(&self.body))
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }
}

/// Renders settings templates into a [`RenderedMessage`]
#[derive(Debug, Clone)]
pub struct Renderer {
    company_fallback: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            company_fallback: DEFAULT_COMPANY_FALLBACK.to_string(),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use different text for `{EMPRESA}` when the company is empty
    pub fn with_company_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.company_fallback = fallback.into();
        self
    }

    /// Substitutions available to the subject template
    pub fn subject_substitutions(&self, settings: &Settings, date: NaiveDate) -> Substitutions {
        let company = if settings.company.is_empty() {
            self.company_fallback.as_str()
        } else {
            settings.company.as_str()
        };

        let mut subs = Substitutions::new();
        subs.first(MONTH_TOKEN, month_name(date))
            .first(YEAR_TOKEN, year_label(date))
            .first(COMPANY_TOKEN, company);
        subs
    }

    /// Substitutions available to the body template
    pub fn body_substitutions(&self, settings: &Settings, date: NaiveDate) -> Substitutions {
        let mut subs = Substitutions::new();
        subs.first(MONTH_TOKEN, month_name(date))
            .first(YEAR_TOKEN, year_label(date))
            .first(SALARY_TOKEN, settings.amount_or_zero().to_string());

        for (index, account) in settings.bank_accounts.iter().enumerate() {
            subs.every(
                positional_token(BANK_ACCOUNT_TOKEN_PREFIX, index + 1),
                account.render_block(),
            );
        }

        for (index, pix) in settings.pix.iter().enumerate() {
            subs.every(positional_token(PIX_TOKEN_PREFIX, index + 1), pix.render_block());
        }

        subs
    }

    /// Resolve subject and body for a reference date
    pub fn render(&self, settings: &Settings, date: NaiveDate) -> RenderedMessage {
        RenderedMessage {
            email: settings.email.clone(),
            subject: self.subject_substitutions(settings, date).apply(&settings.subject),
            body: self.body_substitutions(settings, date).apply(&settings.body),
        }
    }
}

/// Render with the default company fallback
pub fn render(settings: &Settings, date: NaiveDate) -> RenderedMessage {
    Renderer::new().render(settings, date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankAccount, Money, PixEntry};

    fn july_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()
    }

    #[test]
    fn test_subject_with_company() {
        let settings = Settings {
            company: "Acme".into(),
            subject: "Recibo {MES}/{ANO} - {EMPRESA}".into(),
            ..Settings::default()
        };

        let message = render(&settings, july_2024());
        assert_eq!(message.subject, "Recibo Julho/2024 - Acme");
    }

    #[test]
    fn test_empty_company_uses_fallback() {
        let settings = Settings {
            subject: "NF {EMPRESA}".into(),
            ..Settings::default()
        };

        assert_eq!(render(&settings, july_2024()).subject, "NF <SEU_NOME>");

        let custom = Renderer::new().with_company_fallback("[empresa]");
        assert_eq!(custom.render(&settings, july_2024()).subject, "NF [empresa]");
    }

    #[test]
    fn test_salary_formatting() {
        let settings = Settings {
            body: "Valor: {SALARIO}".into(),
            amount: Some(Money::from_decimal(1234.5)),
            ..Settings::default()
        };

        assert_eq!(render(&settings, july_2024()).body, "Valor: R$ 1.234,50");
    }

    #[test]
    fn test_missing_amount_renders_zero() {
        let settings = Settings {
            body: "{SALARIO}".into(),
            ..Settings::default()
        };

        assert_eq!(render(&settings, july_2024()).body, "R$ 0,00");
    }

    #[test]
    fn test_scalar_tokens_replace_first_occurrence_only() {
        let settings = Settings {
            company: "Acme".into(),
            subject: "{MES} {MES} {EMPRESA} {EMPRESA}".into(),
            body: "{ANO} {ANO} {SALARIO} {SALARIO}".into(),
            amount: Some(Money::from_cents(100)),
            ..Settings::default()
        };

        let message = render(&settings, july_2024());
        assert_eq!(message.subject, "Julho {MES} Acme {EMPRESA}");
        assert_eq!(message.body, "2024 {ANO} R$ 1,00 {SALARIO}");
    }

    #[test]
    fn test_bank_accounts_replace_every_occurrence() {
        let settings = Settings {
            body: "{CONTA_01}|{CONTA_02}|{CONTA_01}|{CONTA_03}".into(),
            bank_accounts: vec![
                BankAccount::new("Nubank", "0001", "111-1"),
                BankAccount::new("Itaú", "0002", "222-2"),
            ],
            ..Settings::default()
        };

        let message = render(&settings, july_2024());
        assert_eq!(
            message.body,
            "0001\n111-1\nNubank|0002\n222-2\nItaú|0001\n111-1\nNubank|{CONTA_03}"
        );
        assert_eq!(message.unresolved_tokens(), vec!["CONTA_03".to_string()]);
    }

    #[test]
    fn test_pix_block() {
        let settings = Settings {
            body: "PIX:\n{PIX_01}\n{PIX_01}".into(),
            pix: vec![PixEntry::new("fulano@pix.com", "Fulano", "Inter")],
            ..Settings::default()
        };

        assert_eq!(
            render(&settings, july_2024()).body,
            "PIX:\nfulano@pix.com\nInter\nFulano\nfulano@pix.com\nInter\nFulano"
        );
    }

    #[test]
    fn test_reordering_changes_token_binding() {
        let mut settings = Settings {
            body: "{CONTA_01}".into(),
            bank_accounts: vec![
                BankAccount::new("A", "1", "1"),
                BankAccount::new("B", "2", "2"),
            ],
            ..Settings::default()
        };
        assert!(render(&settings, july_2024()).body.ends_with("A"));

        settings.move_bank_account(2, 1).unwrap();
        assert!(render(&settings, july_2024()).body.ends_with("B"));
    }

    #[test]
    fn test_tokens_scoped_to_their_template() {
        let settings = Settings {
            company: "Acme".into(),
            subject: "{SALARIO} {CONTA_01}".into(),
            body: "{EMPRESA}".into(),
            amount: Some(Money::from_cents(100)),
            bank_accounts: vec![BankAccount::new("A", "1", "1")],
            ..Settings::default()
        };

        let message = render(&settings, july_2024());
        assert_eq!(message.subject, "{SALARIO} {CONTA_01}");
        assert_eq!(message.body, "{EMPRESA}");
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let settings = Settings {
            company: "{ANO}".into(),
            subject: "{EMPRESA}".into(),
            ..Settings::default()
        };

        assert_eq!(render(&settings, july_2024()).subject, "{ANO}");
    }

    #[test]
    fn test_empty_settings_render_empty() {
        let message = render(&Settings::default(), july_2024());
        assert_eq!(message, RenderedMessage::default());
    }

    #[test]
    fn test_idempotent_on_resolved_output() {
        let settings = Settings {
            company: "Acme".into(),
            subject: "Recibo {MES}/{ANO} - {EMPRESA}".into(),
            body: "Segue {SALARIO}\n{CONTA_01}".into(),
            amount: Some(Money::from_cents(123450)),
            bank_accounts: vec![BankAccount::new("Nubank", "0001", "1-1")],
            ..Settings::default()
        };

        let first = render(&settings, july_2024());
        let again = Settings {
            subject: first.subject.clone(),
            body: first.body.clone(),
            ..settings.clone()
        };
        let second = render(&again, july_2024());

        assert_eq!(first, second);
    }

    #[test]
    fn test_field_accessor() {
        let message = RenderedMessage {
            email: "a@b.c".into(),
            subject: "s".into(),
            body: "b".into(),
        };
        assert_eq!(message.field(MessageField::Email), "a@b.c");
        assert_eq!(message.field(MessageField::Body), "b");
    }
}
