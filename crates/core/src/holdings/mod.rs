pub mod holdings_model;
pub mod holdings_service;
pub mod holdings_traits;

pub use holdings_model::{normalize_symbol, Holding, HoldingInput};
pub use holdings_service::HoldingsService;
pub use holdings_traits::{HoldingsRepositoryTrait, HoldingsServiceTrait};
