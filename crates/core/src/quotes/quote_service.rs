//! Quote fetching with explicit unavailability.
//!
//! Provider failures never bubble out of this layer as errors. Every
//! fetch resolves to a tagged result: either a usable quote or a reason
//! it could not be priced. The valuation engine branches on the tag
//! instead of catching exceptions mid-calculation.

use async_trait::async_trait;
use log::warn;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use folionest_market_data::{MarketDataError, MarketDataProvider, Quote};

/// Why a symbol could not be priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UnavailableReason {
    /// The provider does not know the symbol.
    UnknownSymbol,
    /// The provider is throttling us.
    RateLimited,
    /// The request timed out or the network failed.
    Network,
    /// The provider answered with a price we refuse to value (zero,
    /// negative, or unparseable).
    InvalidPrice,
    /// Anything else the provider reported.
    ProviderError,
}

impl From<&MarketDataError> for UnavailableReason {
    fn from(err: &MarketDataError) -> Self {
        match err {
            MarketDataError::SymbolNotFound(_) => UnavailableReason::UnknownSymbol,
            MarketDataError::RateLimited { .. } => UnavailableReason::RateLimited,
            MarketDataError::Timeout { .. } | MarketDataError::Network(_) => {
                UnavailableReason::Network
            }
            MarketDataError::InvalidPrice { .. } => UnavailableReason::InvalidPrice,
            MarketDataError::ProviderError { .. } => UnavailableReason::ProviderError,
        }
    }
}

/// Outcome of a single quote fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteFetch {
    Available(Quote),
    Unavailable(UnavailableReason),
}

impl QuoteFetch {
    pub fn price(&self) -> Option<Decimal> {
        match self {
            QuoteFetch::Available(quote) => Some(quote.price),
            QuoteFetch::Unavailable(_) => None,
        }
    }
}

/// Quote access used by the portfolio layer.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Fetch the latest price for `symbol`. Infallible by contract;
    /// failures surface as `QuoteFetch::Unavailable`.
    async fn fetch_price(&self, symbol: &str) -> QuoteFetch;
}

pub struct QuoteService {
    provider: Arc<dyn MarketDataProvider>,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn fetch_price(&self, symbol: &str) -> QuoteFetch {
        match self.provider.get_latest_quote(symbol).await {
            Ok(quote) if quote.price <= Decimal::ZERO => {
                warn!(
                    "Provider {} returned non-positive price {} for {}",
                    self.provider.id(),
                    quote.price,
                    symbol
                );
                QuoteFetch::Unavailable(UnavailableReason::InvalidPrice)
            }
            Ok(quote) => QuoteFetch::Available(quote),
            Err(err) => {
                warn!(
                    "Quote fetch for {} via {} failed: {}",
                    symbol,
                    self.provider.id(),
                    err
                );
                QuoteFetch::Unavailable(UnavailableReason::from(&err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rust_decimal_macros::dec;

    struct StaticProvider {
        result: fn(&str) -> Result<Quote, MarketDataError>,
    }

    #[async_trait]
    impl MarketDataProvider for StaticProvider {
        fn id(&self) -> &'static str {
            "static"
        }

        async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
            (self.result)(symbol)
        }
    }

    fn service(result: fn(&str) -> Result<Quote, MarketDataError>) -> QuoteService {
        QuoteService::new(Arc::new(StaticProvider { result }))
    }

    #[tokio::test]
    async fn test_successful_fetch_is_available() {
        let svc = service(|sym| Ok(Quote::new(sym, dec!(150.25), "static")));
        let fetch = svc.fetch_price("AAPL").await;
        assert_eq!(fetch.price(), Some(dec!(150.25)));
    }

    #[tokio::test]
    async fn test_unknown_symbol_maps_to_reason() {
        let svc = service(|sym| Err(MarketDataError::SymbolNotFound(sym.to_string())));
        assert_eq!(
            svc.fetch_price("ZZZZ").await,
            QuoteFetch::Unavailable(UnavailableReason::UnknownSymbol)
        );
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_reason() {
        let svc = service(|_| {
            Err(MarketDataError::RateLimited {
                provider: "static".to_string(),
            })
        });
        assert_eq!(
            svc.fetch_price("AAPL").await,
            QuoteFetch::Unavailable(UnavailableReason::RateLimited)
        );
    }

    #[tokio::test]
    async fn test_zero_price_is_invalid() {
        let svc = service(|sym| Ok(Quote::new(sym, dec!(0), "static")));
        assert_eq!(
            svc.fetch_price("AAPL").await,
            QuoteFetch::Unavailable(UnavailableReason::InvalidPrice)
        );
    }

    #[tokio::test]
    async fn test_negative_price_is_invalid() {
        let svc = service(|sym| Ok(Quote::new(sym, dec!(-1.50), "static")));
        assert_eq!(
            svc.fetch_price("AAPL").await,
            QuoteFetch::Unavailable(UnavailableReason::InvalidPrice)
        );
    }
}
