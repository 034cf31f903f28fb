//! Traits for the key/value application settings store.

use rust_decimal::Decimal;

use crate::errors::Result;

/// Key/value settings persistence. Implemented by the storage layer.
pub trait SettingsRepositoryTrait: Send + Sync {
    fn get_setting(&self, key: &str) -> Result<Option<String>>;

    fn set_setting(&self, key: &str, value: &str) -> Result<()>;
}

/// Typed settings operations exposed to the API layer.
pub trait SettingsServiceTrait: Send + Sync {
    /// Current cash balance; zero when never set.
    fn get_cash(&self) -> Result<Decimal>;

    /// Overwrite the cash balance. Rejects negative amounts.
    fn set_cash(&self, amount: Decimal) -> Result<Decimal>;
}
