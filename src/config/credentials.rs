//! API key handling.
//!
//! The catalog key travels in the query string, so it must never end up
//! in log lines that print request URLs or config values.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when building request URLs.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

impl ApiConfig {
    /// Resolve the configured key. Empty strings count as unset.
    pub fn resolve_key(&self) -> Option<SecureString> {
        self.api_key
            .as_ref()
            .filter(|key| !key.is_empty())
            .map(|key| SecureString::new(key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secure_string_does_not_leak() {
        let secret = SecureString::new("my-secret-key".to_string());

        let debug_output = format!("{:?}", secret);
        assert!(!debug_output.contains("my-secret-key"));
        assert!(debug_output.contains("••••••••"));

        let display_output = format!("{}", secret);
        assert!(!display_output.contains("my-secret-key"));

        assert_eq!(secret.expose(), "my-secret-key");
    }

    #[test]
    fn test_empty_key_is_unset() {
        let api = ApiConfig {
            api_key: Some(String::new()),
            ..ApiConfig::default()
        };
        assert!(api.resolve_key().is_none());

        let api = ApiConfig {
            api_key: Some("abc".to_string()),
            ..ApiConfig::default()
        };
        assert_eq!(api.resolve_key().unwrap().expose(), "abc");
    }
}
