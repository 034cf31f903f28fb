//! Holding domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};

/// A persisted record of quantity owned for one ticker symbol.
///
/// `symbol` is the identity key: at most one holding exists per symbol.
/// `unit_cost` is informational cost basis per unit; the valuation engine
/// stores and returns it but never reads it (reserved for future
/// gain/loss work).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub quantity: Decimal,
    pub unit_cost: Option<Decimal>,
}

/// Caller-supplied holding data for add/import operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingInput {
    pub symbol: String,
    pub quantity: Decimal,
    #[serde(default)]
    pub unit_cost: Option<Decimal>,
}

/// Canonical symbol form: trimmed, uppercase.
///
/// Applied at every write and lookup boundary so "aapl " and "AAPL" hit
/// the same row.
pub fn normalize_symbol(symbol: &str) -> Result<String> {
    let normalized = symbol.trim().to_uppercase();
    if normalized.is_empty() {
        return Err(Error::Validation(ValidationError::MissingField(
            "symbol".to_string(),
        )));
    }
    Ok(normalized)
}
