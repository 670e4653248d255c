use thiserror::Error;

use crate::api::ApiError;
use crate::persistence::PersistenceError;

/// Failure category, independent of the concrete cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-2xx response or no response at all.
    Network,
    /// The request exceeded the configured budget.
    Timeout,
    /// Malformed user input.
    Validation,
    /// Well-formed request, but no usable content came back.
    NotFound,
    /// Durable storage failed.
    Persistence,
}

/// Errors surfaced by state store operations.
///
/// Operations never swallow these; the caller decides how to present them.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("{message}")]
    Validation {
        /// Form field that failed, when the failure is tied to one.
        field: Option<String>,
        message: String,
    },

    #[error("Could not find {what}")]
    NotFound { what: String },

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

impl StoreError {
    pub(crate) fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Api(ApiError::Timeout { .. }) => ErrorKind::Timeout,
            StoreError::Api(ApiError::Malformed(_)) => ErrorKind::NotFound,
            StoreError::Api(_) => ErrorKind::Network,
            StoreError::Validation { .. } => ErrorKind::Validation,
            StoreError::NotFound { .. } => ErrorKind::NotFound,
            StoreError::Persistence(_) => ErrorKind::Persistence,
        }
    }
}
