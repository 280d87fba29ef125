//! Settings persistence
//!
//! The settings object lives under one namespaced key and is always read and
//! written as a whole.

use tracing::{debug, warn};

use super::kv::KeyValueStore;
use crate::error::NotaResult;
use crate::models::Settings;

/// Loads and saves the settings blob through a key-value store
#[derive(Debug, Clone)]
pub struct SettingsStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> SettingsStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The key the blob is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check whether settings have ever been saved
    pub fn exists(&self) -> NotaResult<bool> {
        Ok(self.store.get(&self.key)?.is_some())
    }

    /// Load the settings, empty when nothing was saved
    ///
    /// A blob that no longer parses is treated as empty settings; the next
    /// save overwrites it.
    pub fn load(&self) -> NotaResult<Settings> {
        let Some(value) = self.store.get(&self.key)? else {
            debug!(key = %self.key, "no stored settings");
            return Ok(Settings::default());
        };

        match serde_json::from_value(value) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring unreadable settings blob");
                Ok(Settings::default())
            }
        }
    }

    /// Overwrite the stored settings with `settings`
    pub fn save(&mut self, settings: &Settings) -> NotaResult<()> {
        let value = serde_json::to_value(settings)?;
        self.store.set(&self.key, value)?;
        debug!(key = %self.key, "settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankAccount, Money};
    use crate::storage::kv::MemoryStore;
    use serde_json::json;

    fn store() -> SettingsStore<MemoryStore> {
        SettingsStore::new(MemoryStore::new(), "minha-nota:settings")
    }

    #[test]
    fn test_load_missing_returns_empty() {
        let store = store();
        assert!(!store.exists().unwrap());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_overwrites_wholesale() {
        let mut store = store();

        let first = Settings {
            email: "a@b.c".into(),
            bank_accounts: vec![BankAccount::new("A", "1", "1")],
            ..Settings::default()
        };
        store.save(&first).unwrap();

        let second = Settings {
            company: "Acme".into(),
            amount: Some(Money::from_cents(100)),
            ..Settings::default()
        };
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, second);
        assert!(loaded.email.is_empty());
        assert!(loaded.bank_accounts.is_empty());
    }

    #[test]
    fn test_loads_browser_blob() {
        let mut kv = MemoryStore::new();
        kv.set(
            "minha-nota:settings",
            json!({
                "email": "rh@acme.com",
                "company": "Acme",
                "subject": "NF {MES}",
                "body": "{SALARIO}",
                "amount": 1234.5,
                "bank_accounts": [{"name": "Nubank", "agency": "0001", "number": "1-1"}],
                "pix": []
            }),
        )
        .unwrap();

        let loaded = SettingsStore::new(kv, "minha-nota:settings").load().unwrap();
        assert_eq!(loaded.amount, Some(Money::from_cents(123450)));
        assert_eq!(loaded.bank_accounts[0].agency, "0001");
    }

    #[test]
    fn test_oversized_amount_keeps_other_fields() {
        let mut kv = MemoryStore::new();
        kv.set(
            "minha-nota:settings",
            json!({"email": "rh@acme.com", "company": "Acme", "amount": 100000000000000000i64}),
        )
        .unwrap();

        let loaded = SettingsStore::new(kv, "minha-nota:settings").load().unwrap();
        assert_eq!(loaded.email, "rh@acme.com");
        assert_eq!(loaded.company, "Acme");
        assert_eq!(loaded.amount, Some(Money::from_cents(i64::MAX)));
    }

    #[test]
    fn test_unreadable_blob_loads_empty() {
        let mut kv = MemoryStore::new();
        kv.set("minha-nota:settings", json!("not an object")).unwrap();

        let store = SettingsStore::new(kv, "minha-nota:settings");
        assert!(store.exists().unwrap());
        assert!(store.load().unwrap().is_empty());
    }
}
