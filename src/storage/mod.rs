//! Storage layer for minha-nota
//!
//! A JSON key-value file stands in for browser local storage; the settings
//! object is one entry in it.

pub mod file_io;
pub mod kv;
pub mod settings;

pub use file_io::{read_json, write_json_atomic};
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use settings::SettingsStore;

use crate::config::{NotaPaths, Preferences};

/// Open the file-backed settings store for a data directory
pub fn open_settings_store(
    paths: &NotaPaths,
    preferences: &Preferences,
) -> SettingsStore<JsonFileStore> {
    SettingsStore::new(
        JsonFileStore::new(paths.storage_file()),
        preferences.storage_key.clone(),
    )
}
