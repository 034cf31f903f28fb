//! Alpha Vantage market data provider implementation.
//!
//! Fetches the current price for an equity symbol via the GLOBAL_QUOTE
//! endpoint. Note: the Alpha Vantage free tier is limited to 5 API calls
//! per minute; rate-limit responses surface as `RateLimited`.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::Quote;
use crate::provider::MarketDataProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER_ID: &str = "ALPHA_VANTAGE";

/// Alpha Vantage quote provider.
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
}

/// GLOBAL_QUOTE response envelope.
///
/// Alpha Vantage reports errors in-band: a missing "Global Quote" object
/// together with an "Error Message", "Note" (usually rate limiting), or
/// "Information" field.
#[derive(Debug, Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
    #[serde(rename = "Note")]
    note: Option<String>,
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    #[allow(dead_code)]
    symbol: Option<String>,
    #[serde(rename = "05. price")]
    price: Option<String>,
}

impl AlphaVantageProvider {
    /// Create a new Alpha Vantage provider with the given API key.
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, api_key }
    }

    async fn fetch(&self, params: &[(&str, &str)]) -> Result<String, MarketDataError> {
        let mut all_params: Vec<(&str, &str)> = params.to_vec();
        all_params.push(("apikey", &self.api_key));

        let url = reqwest::Url::parse_with_params(BASE_URL, &all_params).map_err(|e| {
            MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to build URL: {}", e),
            }
        })?;

        debug!(
            "Alpha Vantage request: {}",
            url.as_str().replace(&self.api_key, "***")
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::ProviderError {
                    provider: PROVIDER_ID.to_string(),
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }

        if !status.is_success() {
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        response
            .text()
            .await
            .map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })
    }

    /// Check for API-level errors reported in the response body.
    fn check_api_error(
        error_message: &Option<String>,
        note: &Option<String>,
        information: &Option<String>,
    ) -> Result<(), MarketDataError> {
        if let Some(ref msg) = error_message {
            if msg.contains("Invalid API call") || msg.contains("not found") {
                return Err(MarketDataError::SymbolNotFound(msg.clone()));
            }
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: msg.clone(),
            });
        }

        // "Note" usually indicates rate limiting
        if let Some(ref msg) = note {
            if msg.contains("API call frequency") || msg.contains("rate limit") {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage note: {}", msg);
        }

        if let Some(ref msg) = information {
            if msg.contains("API call frequency") || msg.contains("rate limit") {
                return Err(MarketDataError::RateLimited {
                    provider: PROVIDER_ID.to_string(),
                });
            }
            warn!("Alpha Vantage info: {}", msg);
        }

        Ok(())
    }

    fn parse_quote(symbol: &str, text: &str) -> Result<Quote, MarketDataError> {
        let response: GlobalQuoteResponse =
            serde_json::from_str(text).map_err(|e| MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message: format!("Failed to parse response: {}", e),
            })?;

        Self::check_api_error(
            &response.error_message,
            &response.note,
            &response.information,
        )?;

        let global_quote = response.global_quote.ok_or_else(|| {
            MarketDataError::SymbolNotFound(format!("No 'Global Quote' data for: {}", symbol))
        })?;

        let price_str = global_quote.price.ok_or_else(|| {
            MarketDataError::InvalidPrice {
                provider: PROVIDER_ID.to_string(),
                symbol: symbol.to_string(),
                message: "price field missing".to_string(),
            }
        })?;

        let price = Decimal::from_str(&price_str).map_err(|e| MarketDataError::InvalidPrice {
            provider: PROVIDER_ID.to_string(),
            symbol: symbol.to_string(),
            message: format!("unparseable price '{}': {}", price_str, e),
        })?;

        Ok(Quote::new(symbol, price, PROVIDER_ID))
    }
}

#[async_trait]
impl MarketDataProvider for AlphaVantageProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn get_latest_quote(&self, symbol: &str) -> Result<Quote, MarketDataError> {
        let params = [("function", "GLOBAL_QUOTE"), ("symbol", symbol)];
        let text = self.fetch(&params).await?;
        let quote = Self::parse_quote(symbol, &text)?;

        debug!(
            "Alpha Vantage: fetched quote for {} at {}",
            symbol, quote.price
        );

        Ok(quote)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_provider_id() {
        let provider = AlphaVantageProvider::new("test_key".to_string());
        assert_eq!(provider.id(), "ALPHA_VANTAGE");
    }

    #[test]
    fn test_parse_quote() {
        let json = r#"{
            "Global Quote": {
                "01. symbol": "AAPL",
                "02. open": "149.00",
                "05. price": "150.2500",
                "07. latest trading day": "2024-01-15"
            }
        }"#;

        let quote = AlphaVantageProvider::parse_quote("AAPL", json).unwrap();
        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, dec!(150.25));
        assert_eq!(quote.source, "ALPHA_VANTAGE");
    }

    #[test]
    fn test_parse_quote_missing_payload_is_not_found() {
        let json = r#"{}"#;
        let err = AlphaVantageProvider::parse_quote("ZZZZ", json).unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(_)));
    }

    #[test]
    fn test_parse_quote_rate_limit_note() {
        let json = r#"{
            "Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."
        }"#;
        let err = AlphaVantageProvider::parse_quote("AAPL", json).unwrap_err();
        assert!(matches!(err, MarketDataError::RateLimited { .. }));
    }

    #[test]
    fn test_parse_quote_error_message() {
        let json = r#"{"Error Message": "Invalid API call. Please retry."}"#;
        let err = AlphaVantageProvider::parse_quote("BAD", json).unwrap_err();
        assert!(matches!(err, MarketDataError::SymbolNotFound(_)));
    }

    #[test]
    fn test_parse_quote_unparseable_price() {
        let json = r#"{"Global Quote": {"01. symbol": "AAPL", "05. price": "n/a"}}"#;
        let err = AlphaVantageProvider::parse_quote("AAPL", json).unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidPrice { .. }));
    }
}
