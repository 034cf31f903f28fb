//! Chat proxy error types.

use thiserror::Error;

use folionest_core::Error as CoreError;

#[derive(Debug, Error)]
pub enum AiError {
    /// Invalid input or request.
    #[error("{0}")]
    InvalidInput(String),

    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Upstream provider error (HTTP failure or unexpected payload).
    #[error("Provider error: {0}")]
    Provider(String),

    /// Core error while assembling portfolio context.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}

impl AiError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        Self::Provider(msg.into())
    }
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        AiError::Provider(err.to_string())
    }
}
