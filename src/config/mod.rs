//! Configuration loading for the recipe client.
//!
//! Configuration lives in a TOML file; every field has a default so a
//! missing or partial file still yields a usable `Config`.

mod credentials;
mod loader;
mod types;

pub use credentials::SecureString;
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, SearchConfig, StorageConfig};
