pub mod portfolio_service;
pub mod valuation;

pub use portfolio_service::{PortfolioService, PortfolioServiceTrait};
pub use valuation::{round_money, value_portfolio, value_position, PositionValuation, ValuationSnapshot};
