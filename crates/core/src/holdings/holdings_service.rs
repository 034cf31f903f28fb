//! Holdings mutation service.
//!
//! Enforces the write-boundary rules the valuation engine relies on:
//! symbols are normalized, quantities are non-negative, and add vs set
//! semantics are kept distinct (one accumulates, the other replaces).

use log::{debug, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use super::holdings_model::{normalize_symbol, Holding, HoldingInput};
use super::holdings_traits::{HoldingsRepositoryTrait, HoldingsServiceTrait};
use crate::errors::{Error, Result};
use crate::imports::{parse_holdings_csv, ImportMode, ImportResult};

#[derive(Clone)]
pub struct HoldingsService {
    repository: Arc<dyn HoldingsRepositoryTrait>,
}

impl HoldingsService {
    pub fn new(repository: Arc<dyn HoldingsRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn validate_quantity(quantity: Decimal) -> Result<()> {
        if quantity < Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "quantity must be non-negative, got {}",
                quantity
            )));
        }
        Ok(())
    }
}

impl HoldingsServiceTrait for HoldingsService {
    fn list_holdings(&self) -> Result<Vec<Holding>> {
        self.repository.list()
    }

    fn get_holding(&self, symbol: &str) -> Result<Option<Holding>> {
        let sym = normalize_symbol(symbol)?;
        self.repository.get_by_symbol(&sym)
    }

    fn add_or_increment(&self, input: HoldingInput) -> Result<Holding> {
        let sym = normalize_symbol(&input.symbol)?;
        Self::validate_quantity(input.quantity)?;

        let holding = match self.repository.get_by_symbol(&sym)? {
            Some(existing) => Holding {
                symbol: sym,
                quantity: existing.quantity + input.quantity,
                // A fresh unit cost wins; otherwise keep what we had.
                unit_cost: input.unit_cost.or(existing.unit_cost),
            },
            None => Holding {
                symbol: sym,
                quantity: input.quantity,
                unit_cost: input.unit_cost,
            },
        };

        debug!(
            "Upserting holding {} with quantity {}",
            holding.symbol, holding.quantity
        );
        self.repository.upsert(&holding)
    }

    fn set_quantity(&self, symbol: &str, quantity: Decimal) -> Result<Holding> {
        let sym = normalize_symbol(symbol)?;
        Self::validate_quantity(quantity)?;

        let existing = self
            .repository
            .get_by_symbol(&sym)?
            .ok_or_else(|| Error::not_found(format!("Holding {} not found", sym)))?;

        self.repository.upsert(&Holding {
            quantity,
            ..existing
        })
    }

    fn delete_holding(&self, symbol: &str) -> Result<()> {
        let sym = normalize_symbol(symbol)?;
        let removed = self.repository.delete(&sym)?;
        if removed == 0 {
            return Err(Error::not_found(format!("Holding {} not found", sym)));
        }
        info!("Deleted holding {}", sym);
        Ok(())
    }

    fn import_csv(&self, csv_text: &str, mode: ImportMode) -> Result<ImportResult> {
        let parsed = parse_holdings_csv(csv_text)?;

        if mode == ImportMode::Replace {
            let cleared = self.repository.delete_all()?;
            info!("Replace import: cleared {} existing holdings", cleared);
        }

        let mut result = ImportResult {
            imported: 0,
            failed: parsed.errors.len(),
            errors: parsed.errors,
        };

        for row in parsed.rows {
            match self.add_or_increment(row) {
                Ok(_) => result.imported += 1,
                Err(e) => {
                    result.failed += 1;
                    result.errors.push(e.to_string());
                }
            }
        }

        info!(
            "CSV import complete: {} imported, {} failed",
            result.imported, result.failed
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// In-memory repository used across the core test suites.
    #[derive(Default)]
    pub struct InMemoryHoldingsRepository {
        rows: Mutex<BTreeMap<String, Holding>>,
    }

    impl HoldingsRepositoryTrait for InMemoryHoldingsRepository {
        fn list(&self) -> Result<Vec<Holding>> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        fn get_by_symbol(&self, sym: &str) -> Result<Option<Holding>> {
            Ok(self.rows.lock().unwrap().get(sym).cloned())
        }

        fn upsert(&self, holding: &Holding) -> Result<Holding> {
            self.rows
                .lock()
                .unwrap()
                .insert(holding.symbol.clone(), holding.clone());
            Ok(holding.clone())
        }

        fn delete(&self, sym: &str) -> Result<usize> {
            Ok(self.rows.lock().unwrap().remove(sym).map_or(0, |_| 1))
        }

        fn delete_all(&self) -> Result<usize> {
            let mut rows = self.rows.lock().unwrap();
            let count = rows.len();
            rows.clear();
            Ok(count)
        }
    }

    fn service() -> HoldingsService {
        HoldingsService::new(Arc::new(InMemoryHoldingsRepository::default()))
    }

    #[test]
    fn test_add_creates_then_increments() {
        let svc = service();
        let first = svc
            .add_or_increment(HoldingInput {
                symbol: "aapl".to_string(),
                quantity: dec!(10),
                unit_cost: Some(dec!(120.50)),
            })
            .unwrap();
        assert_eq!(first.symbol, "AAPL");
        assert_eq!(first.quantity, dec!(10));

        let second = svc
            .add_or_increment(HoldingInput {
                symbol: "AAPL".to_string(),
                quantity: dec!(2.5),
                unit_cost: None,
            })
            .unwrap();
        assert_eq!(second.quantity, dec!(12.5));
        assert_eq!(second.unit_cost, Some(dec!(120.50)));
    }

    #[test]
    fn test_set_quantity_replaces() {
        let svc = service();
        svc.add_or_increment(HoldingInput {
            symbol: "MSFT".to_string(),
            quantity: dec!(4),
            unit_cost: None,
        })
        .unwrap();

        let updated = svc.set_quantity("msft", dec!(1)).unwrap();
        assert_eq!(updated.quantity, dec!(1));
    }

    #[test]
    fn test_set_quantity_unknown_symbol_is_not_found() {
        let svc = service();
        let err = svc.set_quantity("ZZZZ", dec!(1)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let svc = service();
        let err = svc
            .add_or_increment(HoldingInput {
                symbol: "AAPL".to_string(),
                quantity: dec!(-1),
                unit_cost: None,
            })
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[test]
    fn test_delete_unknown_symbol_is_not_found() {
        let svc = service();
        let err = svc.delete_holding("ZZZZ").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_leaves_other_holdings() {
        let svc = service();
        for sym in ["AAPL", "MSFT"] {
            svc.add_or_increment(HoldingInput {
                symbol: sym.to_string(),
                quantity: dec!(1),
                unit_cost: None,
            })
            .unwrap();
        }
        svc.delete_holding("AAPL").unwrap();
        let left = svc.list_holdings().unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].symbol, "MSFT");
    }

    #[test]
    fn test_import_append_accumulates() {
        let svc = service();
        svc.add_or_increment(HoldingInput {
            symbol: "AAPL".to_string(),
            quantity: dec!(5),
            unit_cost: None,
        })
        .unwrap();

        let csv = "symbol,quantity\nAAPL,5\nMSFT,2\n";
        let result = svc.import_csv(csv, ImportMode::Append).unwrap();
        assert_eq!(result.imported, 2);
        assert_eq!(result.failed, 0);

        let aapl = svc.get_holding("AAPL").unwrap().unwrap();
        assert_eq!(aapl.quantity, dec!(10));
    }

    #[test]
    fn test_import_replace_clears_first() {
        let svc = service();
        svc.add_or_increment(HoldingInput {
            symbol: "TSLA".to_string(),
            quantity: dec!(3),
            unit_cost: None,
        })
        .unwrap();

        let csv = "symbol,quantity,unit_cost\nAAPL,10,120.00\n";
        let result = svc.import_csv(csv, ImportMode::Replace).unwrap();
        assert_eq!(result.imported, 1);

        let all = svc.list_holdings().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].symbol, "AAPL");
        assert_eq!(all[0].unit_cost, Some(dec!(120.00)));
    }

    #[test]
    fn test_import_collects_row_errors() {
        let svc = service();
        let csv = "symbol,quantity\nAAPL,10\nMSFT,abc\n,5\n";
        let result = svc.import_csv(csv, ImportMode::Append).unwrap();
        assert_eq!(result.imported, 1);
        assert_eq!(result.failed, 2);
        assert_eq!(result.errors.len(), 2);
    }
}
