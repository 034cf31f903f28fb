//! Market data providers for folionest.
//!
//! This crate defines the [`MarketDataProvider`] trait and the concrete
//! providers the portfolio tracker can fetch live quotes from:
//! - Alpha Vantage (GLOBAL_QUOTE endpoint)
//! - A fixture provider with a static price table, used when no API key
//!   is configured and in tests
//!
//! Providers return a [`Quote`] or a [`MarketDataError`]; how failures
//! degrade a valuation is decided by the consumer, not here.

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::Quote;
pub use provider::{AlphaVantageProvider, FixtureProvider, MarketDataProvider};
