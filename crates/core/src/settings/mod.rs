pub mod settings_service;
pub mod settings_traits;

pub use settings_service::{SettingsService, CASH_BALANCE_KEY};
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
