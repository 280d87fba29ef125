//! Bank account model
//!
//! A bank account is rendered into the body wherever its positional token
//! (`{CONTA_01}`, `{CONTA_02}`, ...) appears.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, ValidationErrors};

/// Token prefix for bank account placeholders
pub const BANK_ACCOUNT_TOKEN_PREFIX: &str = "CONTA";

/// A bank account the payment can be sent to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    /// Institution name
    #[serde(default)]
    pub name: String,

    /// Branch (agência)
    #[serde(default)]
    pub agency: String,

    /// Account number
    #[serde(default)]
    pub number: String,
}

impl BankAccount {
    /// Create a new bank account
    pub fn new(
        name: impl Into<String>,
        agency: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            agency: agency.into(),
            number: number.into(),
        }
    }

    /// The three-line block substituted for this account's token
    pub fn render_block(&self) -> String {
        format!("{}\n{}\n{}", self.agency, self.number, self.name)
    }

    /// Collect required-field errors, prefixing paths with `bank_accounts.<index>`
    pub fn validate_into(&self, index: usize, errors: &mut ValidationErrors) {
        for (field, value) in [
            ("name", &self.name),
            ("agency", &self.agency),
            ("number", &self.number),
        ] {
            if value.is_empty() {
                errors.push(FieldError::required(format!(
                    "bank_accounts.{}.{}",
                    index, field
                )));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_block_order() {
        let account = BankAccount::new("Banco do Brasil", "1234-5", "98765-0");
        assert_eq!(account.render_block(), "1234-5\n98765-0\nBanco do Brasil");
    }

    #[test]
    fn test_validate_reports_each_missing_field() {
        let account = BankAccount::new("Nubank", "", "");
        let mut errors = ValidationErrors::new();
        account.validate_into(2, &mut errors);

        assert_eq!(errors.len(), 2);
        assert!(errors.has_field("bank_accounts.2.agency"));
        assert!(errors.has_field("bank_accounts.2.number"));
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let account = BankAccount::new(" ", "0001", "1-1");
        let mut errors = ValidationErrors::new();
        account.validate_into(0, &mut errors);
        assert!(errors.is_empty());
    }
}
