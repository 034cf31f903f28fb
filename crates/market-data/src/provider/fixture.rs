//! Fixture provider with a static price table.
//!
//! Used when no Alpha Vantage API key is configured, so the tracker stays
//! usable for local evaluation, and as a scriptable provider in tests.

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::MarketDataProvider;

const PROVIDER_ID: &str = "FIXTURE";

/// Quote provider backed by an in-memory symbol to price table.
pub struct FixtureProvider {
    prices: HashMap<String, Decimal>,
}

impl FixtureProvider {
    /// Default placeholder table: a handful of well-known symbols so the
    /// API is exercisable without an API key.
    pub fn new() -> Self {
        let mut prices = HashMap::new();
        prices.insert("AAPL".to_string(), Decimal::new(150_00, 2));
        prices.insert("MSFT".to_string(), Decimal::new(300_00, 2));
        prices.insert("GOOGL".to_string(), Decimal::new(2700_00, 2));
        Self { prices }
    }

    /// Build a provider from explicit symbol/price pairs.
    pub fn with_prices<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, Decimal)>,
        S: Into<String>,
    {
        Self {
            prices: pairs
                .into_iter()
                .map(|(s, p)| (s.into().to_uppercase(), p))
                .collect(),
        }
    }
}

impl Default for FixtureProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for FixtureProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        match self.prices.get(&symbol.to_uppercase()) {
            Some(price) => {
                debug!("Fixture quote for {}: {}", symbol, price);
                Ok(Quote::new(symbol.to_uppercase(), *price, PROVIDER_ID))
            }
            None => Err(MarketDataError::SymbolNotFound(symbol.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_known_symbol() {
        let provider = FixtureProvider::new();
        let quote = provider.get_latest_quote("AAPL").await.unwrap();
        assert_eq!(quote.price, dec!(150.00));
        assert_eq!(quote.source, "FIXTURE");
    }

    #[tokio::test]
    async fn test_symbol_lookup_is_case_insensitive() {
        let provider = FixtureProvider::with_prices([("msft", dec!(300))]);
        let quote = provider.get_latest_quote("MSFT").await.unwrap();
        assert_eq!(quote.symbol, "MSFT");
    }

    #[tokio::test]
    async fn test_unknown_symbol() {
        let provider = FixtureProvider::new();
        let err = provider.get_latest_quote("ZZZZ").await.unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(_)));
    }
}
