//! Valuation output types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::quotes::UnavailableReason;

/// One holding valued against the latest fetched price.
///
/// `price`, `position_value` and `percentage_of_portfolio` are all absent
/// together when the symbol could not be priced; `unavailable_reason`
/// says why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionValuation {
    pub symbol: String,
    pub quantity: Decimal,
    pub unit_cost: Option<Decimal>,
    pub price: Option<Decimal>,
    pub position_value: Option<Decimal>,
    /// Share of `stock_total`, in percent, rounded to 2 decimal places.
    /// Cash is intentionally not part of the denominator.
    pub percentage_of_portfolio: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unavailable_reason: Option<UnavailableReason>,
}

/// Full portfolio valuation at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSnapshot {
    pub positions: Vec<PositionValuation>,
    /// Sum of priced position values, rounded to 2 decimal places.
    pub stock_total: Decimal,
    pub cash: Decimal,
    /// `stock_total + cash`.
    pub grand_total: Decimal,
}
