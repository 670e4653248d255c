use std::collections::HashMap;

use parking_lot::Mutex;

use super::{PersistenceAdapter, PersistenceError};

/// Process-local store. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, as if written by an earlier session.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.lock().insert(key.to_string(), value.to_string());
        store
    }
}

impl PersistenceAdapter for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_loads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.load("bookmarks").unwrap(), None);
    }

    #[test]
    fn store_overwrites_wholesale() {
        let store = MemoryStore::with_value("bookmarks", "[1]");
        store.store("bookmarks", "[]").unwrap();
        assert_eq!(store.load("bookmarks").unwrap().as_deref(), Some("[]"));
    }
}
