use thiserror::Error;

/// Transport-level failures talking to the recipe catalog.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The catalog answered with a non-2xx status.
    #[error("{message} ({status})")]
    Status { status: u16, message: String },

    /// The request never produced a response.
    #[error("Connection to recipe catalog failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The request did not settle within the configured budget.
    #[error("Request took too long! Timeout after {seconds} second(s)")]
    Timeout { seconds: u64 },

    /// The configured endpoint or a derived URL does not parse.
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// A 2xx response whose body is not JSON.
    #[error("Malformed response body: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Status code of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
