//! Settings service
//!
//! Business logic on top of the settings store: every change loads the
//! whole settings object, applies the edit, validates and writes the whole
//! object back.

use chrono::NaiveDate;
use tracing::info;

use crate::config::{NotaPaths, Preferences};
use crate::error::NotaResult;
use crate::models::{BankAccount, PixEntry, Settings};
use crate::storage::{open_settings_store, JsonFileStore, KeyValueStore, SettingsStore};
use crate::template::{RenderedMessage, Renderer};

/// Service for reading, editing and rendering the settings
pub struct SettingsService<S: KeyValueStore> {
    store: SettingsStore<S>,
}

impl SettingsService<JsonFileStore> {
    /// Open the file-backed service for a data directory
    pub fn open(paths: &NotaPaths, preferences: &Preferences) -> Self {
        Self::new(open_settings_store(paths, preferences))
    }
}

impl<S: KeyValueStore> SettingsService<S> {
    pub fn new(store: SettingsStore<S>) -> Self {
        Self { store }
    }

    /// Whether settings have been saved before
    pub fn is_configured(&self) -> NotaResult<bool> {
        self.store.exists()
    }

    /// Load the current settings
    pub fn load(&self) -> NotaResult<Settings> {
        self.store.load()
    }

    /// Validate and overwrite the stored settings
    pub fn save(&mut self, settings: &Settings) -> NotaResult<()> {
        settings.validate()?;
        self.store.save(settings)?;

        info!(
            bank_accounts = settings.bank_accounts.len(),
            pix = settings.pix.len(),
            "settings saved"
        );
        Ok(())
    }

    /// Load, edit and save the settings in one step
    pub fn update<T, F>(&mut self, edit: F) -> NotaResult<(Settings, T)>
    where
        F: FnOnce(&mut Settings) -> NotaResult<T>,
    {
        let mut settings = self.load()?;
        let result = edit(&mut settings)?;
        self.save(&settings)?;
        Ok((settings, result))
    }

    /// Append a bank account, returning its 1-based position
    pub fn add_bank_account(&mut self, account: BankAccount) -> NotaResult<usize> {
        self.update(|settings| Ok(settings.add_bank_account(account)))
            .map(|(_, position)| position)
    }

    /// Remove the bank account at a 1-based position
    pub fn remove_bank_account(&mut self, position: usize) -> NotaResult<BankAccount> {
        self.update(|settings| settings.remove_bank_account(position))
            .map(|(_, removed)| removed)
    }

    /// Move a bank account between 1-based positions
    pub fn move_bank_account(&mut self, from: usize, to: usize) -> NotaResult<()> {
        self.update(|settings| settings.move_bank_account(from, to))
            .map(|_| ())
    }

    /// Append a PIX entry, returning its 1-based position
    pub fn add_pix(&mut self, pix: PixEntry) -> NotaResult<usize> {
        self.update(|settings| Ok(settings.add_pix(pix)))
            .map(|(_, position)| position)
    }

    /// Remove the PIX entry at a 1-based position
    pub fn remove_pix(&mut self, position: usize) -> NotaResult<PixEntry> {
        self.update(|settings| settings.remove_pix(position))
            .map(|(_, removed)| removed)
    }

    /// Move a PIX entry between 1-based positions
    pub fn move_pix(&mut self, from: usize, to: usize) -> NotaResult<()> {
        self.update(|settings| settings.move_pix(from, to)).map(|_| ())
    }

    /// Render the stored settings for a reference date
    pub fn render(&self, renderer: &Renderer, date: NaiveDate) -> NotaResult<RenderedMessage> {
        let settings = self.load()?;
        Ok(renderer.render(&settings, date))
    }
}
