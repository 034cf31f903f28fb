//! Domain core for the folionest portfolio tracker.
//!
//! This crate is storage-agnostic: persistence is expressed as repository
//! traits (`HoldingsRepositoryTrait`, `SettingsRepositoryTrait`) that the
//! storage layer implements, and live prices come through the
//! `QuoteServiceTrait` facade over a market data provider.
//!
//! The valuation engine (`portfolio::valuation`) is pure; the portfolio
//! query service (`portfolio::PortfolioService`) orchestrates repository
//! reads, concurrent quote fetches, and the engine.

pub mod errors;
pub mod holdings;
pub mod imports;
pub mod portfolio;
pub mod quotes;
pub mod settings;

pub use errors::{DatabaseError, Error, Result, ValidationError};
