//! Quote model shared by all providers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A point-in-time price for a symbol.
///
/// Quotes are ephemeral: they are fetched per valuation request and never
/// persisted or cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Uppercase ticker symbol the quote is for.
    pub symbol: String,
    /// Current price in the provider's quote currency (USD for this tracker).
    pub price: Decimal,
    /// When the quote was fetched, not when the market printed it.
    pub fetched_at: DateTime<Utc>,
    /// Provider id that produced the quote, for logging.
    pub source: String,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, price: Decimal, source: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price,
            fetched_at: Utc::now(),
            source: source.into(),
        }
    }
}
