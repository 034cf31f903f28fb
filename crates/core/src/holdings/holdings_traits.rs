//! Traits for holdings persistence and mutation.

use rust_decimal::Decimal;

use super::holdings_model::{Holding, HoldingInput};
use crate::errors::Result;
use crate::imports::{ImportMode, ImportResult};

/// Keyed store for holdings. Implemented by the storage layer.
pub trait HoldingsRepositoryTrait: Send + Sync {
    /// All holdings, ordered by symbol.
    fn list(&self) -> Result<Vec<Holding>>;

    /// Look up one holding by (already normalized) symbol.
    fn get_by_symbol(&self, sym: &str) -> Result<Option<Holding>>;

    /// Insert or replace the row for `holding.symbol`.
    fn upsert(&self, holding: &Holding) -> Result<Holding>;

    /// Delete one holding; returns the number of rows removed (0 or 1).
    fn delete(&self, sym: &str) -> Result<usize>;

    /// Delete every holding; returns the number of rows removed.
    fn delete_all(&self) -> Result<usize>;
}

/// Holdings mutation operations exposed to the API layer.
pub trait HoldingsServiceTrait: Send + Sync {
    fn list_holdings(&self) -> Result<Vec<Holding>>;

    fn get_holding(&self, symbol: &str) -> Result<Option<Holding>>;

    /// Accumulating add: quantity is added onto an existing holding, or a
    /// new holding is created. Distinct from `set_quantity`, which replaces.
    fn add_or_increment(&self, input: HoldingInput) -> Result<Holding>;

    /// Overwrite the quantity of an existing holding. NotFound if absent.
    fn set_quantity(&self, symbol: &str, quantity: Decimal) -> Result<Holding>;

    /// Remove a holding. NotFound if absent.
    fn delete_holding(&self, symbol: &str) -> Result<()>;

    /// Bulk CSV import; see `imports` for the accepted format.
    fn import_csv(&self, csv_text: &str, mode: ImportMode) -> Result<ImportResult>;
}
