//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching a quote from a provider.
///
/// Every variant maps to the same outward behavior for valuation (the
/// price is treated as unavailable); the variants exist so the reason is
/// inspectable and loggable.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The provider does not know the symbol. Terminal for this symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider rate limited the request.
    #[error("Rate limited: {provider}")]
    RateLimited { provider: String },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout { provider: String },

    /// The provider answered, but with a zero, negative, or unparseable price.
    #[error("Invalid price from {provider} for {symbol}: {message}")]
    InvalidPrice {
        provider: String,
        symbol: String,
        message: String,
    },

    /// A provider-specific error (bad payload, HTTP error status, API error message).
    #[error("Provider error: {provider} - {message}")]
    ProviderError { provider: String, message: String },

    /// A network error occurred while talking to the provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
