use thiserror::Error;

/// New Relic specific errors that can occur during API operations.
///
/// SECURITY: Error messages must NEVER contain sensitive data like API keys.
#[derive(Debug, Error)]
pub enum NewRelicError {
    /// The requested dashboard does not exist (HTTP 404)
    #[error("dashboard not found")]
    NotFound,

    /// Authentication failed (invalid key or missing permission)
    #[error("authentication failed: {message}")]
    Auth { message: String },

    /// API returned an error response
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Network-level error (connection failed, timeout, etc.)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Rate limited by the New Relic API
    #[error("rate limited, retry after {retry_after}s")]
    RateLimited { retry_after: u64 },
}

impl NewRelicError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, NewRelicError::NotFound)
    }
}

impl From<NewRelicError> for crate::providers::ProviderError {
    fn from(err: NewRelicError) -> Self {
        crate::providers::ProviderError::NewRelic(err.to_string())
    }
}
