//! Market data provider trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::Quote;

/// Trait for market data providers.
///
/// Implement this trait to add support for a new quote source. Callers
/// issue one call per symbol; calls for distinct symbols are independent
/// and may run concurrently.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "ALPHA_VANTAGE".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the latest quote for a symbol.
    ///
    /// Returns the current quote on success, or a [`MarketDataError`]
    /// describing why the price is unavailable. Implementations must not
    /// retry internally; the caller owns the degradation policy.
    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError>;
}
