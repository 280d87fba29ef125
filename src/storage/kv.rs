//! Key-value stores
//!
//! A flat map from string keys to JSON values, the on-disk counterpart of the
//! browser's local storage. `JsonFileStore` persists the whole map to one
//! file on every write; `MemoryStore` keeps it in memory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde_json::Value;

use super::file_io::{read_json, write_json_atomic};
use crate::error::NotaResult;

/// Durable string-keyed storage of JSON values
pub trait KeyValueStore {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> NotaResult<Option<Value>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: Value) -> NotaResult<()>;
}

/// Key-value store backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_all(&self) -> NotaResult<BTreeMap<String, Value>> {
        read_json(&self.path)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> NotaResult<Option<Value>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> NotaResult<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);
        write_json_atomic(&self.path, &entries)
    }
}

/// In-memory key-value store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> NotaResult<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> NotaResult<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}
