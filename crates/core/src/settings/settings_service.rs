//! Typed access to the key/value settings store.
//!
//! The only setting the portfolio layer cares about today is the cash
//! balance, a single decimal stored under a fixed key.

use log::debug;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::{Error, Result};
use crate::portfolio::valuation::round_money;

/// Settings key holding the cash balance.
pub const CASH_BALANCE_KEY: &str = "cash";

#[derive(Clone)]
pub struct SettingsService {
    repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self { repository }
    }
}

impl SettingsServiceTrait for SettingsService {
    fn get_cash(&self) -> Result<Decimal> {
        match self.repository.get_setting(CASH_BALANCE_KEY)? {
            Some(raw) => Decimal::from_str(&raw).map_err(|e| {
                Error::Unexpected(format!("Stored cash balance '{}' is not a decimal: {}", raw, e))
            }),
            None => Ok(Decimal::ZERO),
        }
    }

    fn set_cash(&self, amount: Decimal) -> Result<Decimal> {
        if amount < Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "cash balance must be non-negative, got {}",
                amount
            )));
        }
        // Normalize at the write boundary so sub-cent amounts never reach
        // the valuation totals.
        let amount = round_money(amount);
        debug!("Setting cash balance to {}", amount);
        self.repository
            .set_setting(CASH_BALANCE_KEY, &amount.to_string())?;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemorySettingsRepository {
        values: Mutex<HashMap<String, String>>,
    }

    impl SettingsRepositoryTrait for InMemorySettingsRepository {
        fn get_setting(&self, key: &str) -> Result<Option<String>> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        fn set_setting(&self, key: &str, value: &str) -> Result<()> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn service() -> SettingsService {
        SettingsService::new(Arc::new(InMemorySettingsRepository::default()))
    }

    #[test]
    fn test_cash_defaults_to_zero() {
        assert_eq!(service().get_cash().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_set_then_get_cash() {
        let svc = service();
        svc.set_cash(dec!(500.00)).unwrap();
        assert_eq!(svc.get_cash().unwrap(), dec!(500.00));
    }

    #[test]
    fn test_set_cash_overwrites() {
        let svc = service();
        svc.set_cash(dec!(100)).unwrap();
        svc.set_cash(dec!(25.50)).unwrap();
        assert_eq!(svc.get_cash().unwrap(), dec!(25.50));
    }

    #[test]
    fn test_set_cash_rounds_to_cents() {
        let svc = service();
        assert_eq!(svc.set_cash(dec!(100.005)).unwrap(), dec!(100.01));
        assert_eq!(svc.get_cash().unwrap(), dec!(100.01));
    }

    #[test]
    fn test_negative_cash_rejected() {
        let svc = service();
        let err = svc.set_cash(dec!(-0.01)).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(svc.get_cash().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_corrupt_stored_value_is_unexpected_error() {
        let repo = Arc::new(InMemorySettingsRepository::default());
        repo.set_setting(CASH_BALANCE_KEY, "not-a-number").unwrap();
        let svc = SettingsService::new(repo);
        assert!(matches!(svc.get_cash().unwrap_err(), Error::Unexpected(_)));
    }
}
