pub mod valuation_calculator;
pub mod valuation_model;

pub use valuation_calculator::{round_money, value_portfolio, value_position};
pub use valuation_model::{PositionValuation, ValuationSnapshot};
