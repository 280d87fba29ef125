//! Billing settings model
//!
//! The single object a user configures once: recipient, company, salary and
//! the subject/body templates, plus the ordered bank accounts and PIX keys
//! the body can refer to by position.

use serde::{Deserialize, Serialize};

use super::bank_account::BankAccount;
use super::money::Money;
use super::pix::PixEntry;
use crate::error::{FieldError, NotaError, NotaResult, ValidationErrors};

/// The user's billing template settings
///
/// Every field may be missing from a stored blob; missing fields load as
/// empty values so a half-filled form still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Recipient e-mail address
    #[serde(default)]
    pub email: String,

    /// Company name, substituted for `{EMPRESA}`
    #[serde(default)]
    pub company: String,

    /// Subject template
    #[serde(default)]
    pub subject: String,

    /// Body template
    #[serde(default)]
    pub body: String,

    /// Salary, substituted for `{SALARIO}`
    #[serde(default)]
    pub amount: Option<Money>,

    /// Bank accounts in token order
    #[serde(default)]
    pub bank_accounts: Vec<BankAccount>,

    /// PIX entries in token order
    #[serde(default)]
    pub pix: Vec<PixEntry>,
}

impl Settings {
    /// Check whether nothing has been configured yet
    pub fn is_empty(&self) -> bool {
        *self == Settings::default()
    }

    /// Salary amount, zero when unset
    pub fn amount_or_zero(&self) -> Money {
        self.amount.unwrap_or_default()
    }

    /// Collect every required-field violation
    pub fn validation_errors(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        for (field, value) in [
            ("email", &self.email),
            ("company", &self.company),
            ("subject", &self.subject),
            ("body", &self.body),
        ] {
            if value.is_empty() {
                errors.push(FieldError::required(field));
            }
        }

        if self.amount.is_none() {
            errors.push(FieldError::required("amount"));
        }

        for (index, account) in self.bank_accounts.iter().enumerate() {
            account.validate_into(index, &mut errors);
        }

        for (index, pix) in self.pix.iter().enumerate() {
            pix.validate_into(index, &mut errors);
        }

        errors
    }

    /// Validate the settings, failing with all field errors at once
    pub fn validate(&self) -> NotaResult<()> {
        self.validation_errors().into_result()
    }

    /// Append a bank account, returning its 1-based position
    pub fn add_bank_account(&mut self, account: BankAccount) -> usize {
        self.bank_accounts.push(account);
        self.bank_accounts.len()
    }

    /// Remove the bank account at a 1-based position
    pub fn remove_bank_account(&mut self, position: usize) -> NotaResult<BankAccount> {
        let index = checked_index(position, self.bank_accounts.len())
            .ok_or_else(|| NotaError::bank_account_not_found(position))?;
        Ok(self.bank_accounts.remove(index))
    }

    /// Move a bank account between 1-based positions; later accounts shift
    pub fn move_bank_account(&mut self, from: usize, to: usize) -> NotaResult<()> {
        let len = self.bank_accounts.len();
        let from_index =
            checked_index(from, len).ok_or_else(|| NotaError::bank_account_not_found(from))?;
        let to_index = checked_index(to, len).ok_or_else(|| NotaError::bank_account_not_found(to))?;

        let account = self.bank_accounts.remove(from_index);
        self.bank_accounts.insert(to_index, account);
        Ok(())
    }

    /// Append a PIX entry, returning its 1-based position
    pub fn add_pix(&mut self, pix: PixEntry) -> usize {
        self.pix.push(pix);
        self.pix.len()
    }

    /// Remove the PIX entry at a 1-based position
    pub fn remove_pix(&mut self, position: usize) -> NotaResult<PixEntry> {
        let index = checked_index(position, self.pix.len())
            .ok_or_else(|| NotaError::pix_not_found(position))?;
        Ok(self.pix.remove(index))
    }

    /// Move a PIX entry between 1-based positions
    pub fn move_pix(&mut self, from: usize, to: usize) -> NotaResult<()> {
        let len = self.pix.len();
        let from_index = checked_index(from, len).ok_or_else(|| NotaError::pix_not_found(from))?;
        let to_index = checked_index(to, len).ok_or_else(|| NotaError::pix_not_found(to))?;

        let entry = self.pix.remove(from_index);
        self.pix.insert(to_index, entry);
        Ok(())
    }
}

/// Convert a 1-based position into an index when it is in range
fn checked_index(position: usize, len: usize) -> Option<usize> {
    if position >= 1 && position <= len {
        Some(position - 1)
    } else {
        None
    }
}
