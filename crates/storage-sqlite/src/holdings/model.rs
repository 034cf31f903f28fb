//! Diesel row type for holdings.
//!
//! Decimals are persisted as TEXT and parsed back on read so no
//! precision is lost to floating point.

use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::StorageError;
use crate::schema::holdings;
use folionest_core::holdings::Holding;

#[derive(Queryable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = holdings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct HoldingDB {
    pub symbol: String,
    pub quantity: String,
    pub unit_cost: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl HoldingDB {
    pub fn from_domain(holding: &Holding) -> Self {
        let now = Utc::now().naive_utc();
        HoldingDB {
            symbol: holding.symbol.clone(),
            quantity: holding.quantity.to_string(),
            unit_cost: holding.unit_cost.map(|c| c.to_string()),
            created_at: now,
            updated_at: now,
        }
    }
}

impl TryFrom<HoldingDB> for Holding {
    type Error = StorageError;

    fn try_from(row: HoldingDB) -> Result<Self, Self::Error> {
        let quantity = Decimal::from_str(&row.quantity).map_err(|e| {
            StorageError::Corrupt(format!(
                "quantity '{}' for {}: {}",
                row.quantity, row.symbol, e
            ))
        })?;
        let unit_cost = row
            .unit_cost
            .as_deref()
            .map(|c| {
                Decimal::from_str(c).map_err(|e| {
                    StorageError::Corrupt(format!("unit cost '{}' for {}: {}", c, row.symbol, e))
                })
            })
            .transpose()?;

        Ok(Holding {
            symbol: row.symbol,
            quantity,
            unit_cost,
        })
    }
}
