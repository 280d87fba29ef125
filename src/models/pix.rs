//! PIX entry model
//!
//! A PIX key is rendered into the body wherever its positional token
//! (`{PIX_01}`, `{PIX_02}`, ...) appears. The key itself is opaque: CPF, e-mail,
//! phone or random key are all just text here.

use serde::{Deserialize, Serialize};

use crate::error::{FieldError, ValidationErrors};

/// Token prefix for PIX placeholders
pub const PIX_TOKEN_PREFIX: &str = "PIX";

/// A PIX key with its owner and institution
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixEntry {
    /// The PIX key
    #[serde(default)]
    pub key: String,

    /// Name of the key owner
    #[serde(default)]
    pub owner: String,

    /// Institution holding the key
    #[serde(default)]
    pub bank: String,
}

impl PixEntry {
    /// Create a new PIX entry
    pub fn new(key: impl Into<String>, owner: impl Into<String>, bank: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            owner: owner.into(),
            bank: bank.into(),
        }
    }

    /// The three-line block substituted for this entry's token
    pub fn render_block(&self) -> String {
        format!("{}\n{}\n{}", self.key, self.bank, self.owner)
    }

    /// Collect required-field errors, prefixing paths with `pix.<index>`
    pub fn validate_into(&self, index: usize, errors: &mut ValidationErrors) {
        for (field, value) in [("key", &self.key), ("owner", &self.owner), ("bank", &self.bank)] {
            if value.is_empty() {
                errors.push(FieldError::required(format!("pix.{}.{}", index, field)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_block_order() {
        let pix = PixEntry::new("fulano@example.com", "Fulano de Tal", "Inter");
        assert_eq!(pix.render_block(), "fulano@example.com\nInter\nFulano de Tal");
    }

    #[test]
    fn test_validate_complete_entry() {
        let pix = PixEntry::new("123.456.789-00", "Fulano", "Itaú");
        let mut errors = ValidationErrors::new();
        pix.validate_into(0, &mut errors);
        assert!(errors.is_empty());
    }
}
