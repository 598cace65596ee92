//! Durable key-value storage for the persisted theme choice.

use std::collections::HashMap;

use crate::error::{js_message, ThemeError};

/// Key-value store holding the explicit theme choice for the session.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
    fn remove(&mut self, key: &str) -> Result<(), ThemeError>;
}

/// The browser's `localStorage`, looked up on every access.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

impl LocalStore {
    fn storage(&self) -> Result<web_sys::Storage, ThemeError> {
        web_sys::window()
            .ok_or(ThemeError::StorageUnavailable)?
            .local_storage()
            .map_err(|e| ThemeError::Storage(js_message(e)))?
            .ok_or(ThemeError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::Storage(js_message(e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::Storage(js_message(e)))
    }

    fn remove(&mut self, key: &str) -> Result<(), ThemeError> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| ThemeError::Storage(js_message(e)))
    }
}

/// In-memory store used off the browser and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), ThemeError> {
        self.entries.remove(key);
        Ok(())
    }
}
