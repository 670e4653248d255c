//! Durable key/value storage for client-side state.
//!
//! Values are opaque strings (the store writes JSON). Writes replace the
//! whole value for a key and complete before `store` returns.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors raised by persistence backends.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Durable key/value store.
pub trait PersistenceAdapter {
    /// Value stored under `key`, or `None` if nothing was ever written.
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the value stored under `key`.
    fn store(&self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<P: PersistenceAdapter + ?Sized> PersistenceAdapter for &P {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).load(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).store(key, value)
    }
}
