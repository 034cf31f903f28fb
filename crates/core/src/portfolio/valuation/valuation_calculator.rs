//! Pure valuation arithmetic.
//!
//! Two-pass algorithm: value every position first, then derive each
//! priced position's share of the stock total. Percentages are only
//! computed when the stock total is positive, so a portfolio with no
//! usable prices never divides by zero.

use rust_decimal::{Decimal, RoundingStrategy};

use super::valuation_model::{PositionValuation, ValuationSnapshot};
use crate::holdings::Holding;
use crate::quotes::QuoteFetch;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Round a monetary amount to 2 decimal places, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Value one holding against a fetch outcome.
///
/// An unavailable quote leaves price, value and percentage absent and
/// records the reason. Percentage is always absent here; it is filled
/// in by `value_portfolio` once the stock total is known.
pub fn value_position(holding: &Holding, fetch: &QuoteFetch) -> PositionValuation {
    let (price, position_value, unavailable_reason) = match fetch {
        QuoteFetch::Available(quote) => {
            let value = round_money(quote.price * holding.quantity);
            (Some(quote.price), Some(value), None)
        }
        QuoteFetch::Unavailable(reason) => (None, None, Some(*reason)),
    };

    PositionValuation {
        symbol: holding.symbol.clone(),
        quantity: holding.quantity,
        unit_cost: holding.unit_cost,
        price,
        position_value,
        percentage_of_portfolio: None,
        unavailable_reason,
    }
}

/// Combine valued positions and the cash balance into a snapshot.
pub fn value_portfolio(mut positions: Vec<PositionValuation>, cash: Decimal) -> ValuationSnapshot {
    let stock_total = round_money(
        positions
            .iter()
            .filter_map(|p| p.position_value)
            .sum::<Decimal>(),
    );

    if stock_total > Decimal::ZERO {
        for position in &mut positions {
            position.percentage_of_portfolio = position
                .position_value
                .map(|value| round_money(value / stock_total * HUNDRED));
        }
    }

    ValuationSnapshot {
        positions,
        stock_total,
        cash,
        grand_total: round_money(stock_total + cash),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::UnavailableReason;
    use folionest_market_data::Quote;
    use rust_decimal_macros::dec;

    fn holding(symbol: &str, quantity: Decimal) -> Holding {
        Holding {
            symbol: symbol.to_string(),
            quantity,
            unit_cost: None,
        }
    }

    fn available(symbol: &str, price: Decimal) -> QuoteFetch {
        QuoteFetch::Available(Quote::new(symbol, price, "test"))
    }

    fn unavailable() -> QuoteFetch {
        QuoteFetch::Unavailable(UnavailableReason::Network)
    }

    #[test]
    fn test_rounding_is_half_away_from_zero() {
        assert_eq!(round_money(dec!(150.005) * dec!(3)), dec!(450.02));
        assert_eq!(round_money(dec!(1.005)), dec!(1.01));
        assert_eq!(round_money(dec!(2.675)), dec!(2.68));
    }

    #[test]
    fn test_value_position_priced() {
        let pos = value_position(&holding("AAPL", dec!(10)), &available("AAPL", dec!(150.00)));
        assert_eq!(pos.price, Some(dec!(150.00)));
        assert_eq!(pos.position_value, Some(dec!(1500.00)));
        assert_eq!(pos.unavailable_reason, None);
    }

    #[test]
    fn test_value_position_unavailable() {
        let pos = value_position(&holding("MSFT", dec!(2)), &unavailable());
        assert_eq!(pos.price, None);
        assert_eq!(pos.position_value, None);
        assert_eq!(pos.unavailable_reason, Some(UnavailableReason::Network));
    }

    #[test]
    fn test_value_position_zero_quantity() {
        let pos = value_position(&holding("AAPL", dec!(0)), &available("AAPL", dec!(150.00)));
        assert_eq!(pos.position_value, Some(dec!(0.00)));
    }

    #[test]
    fn test_two_stock_scenario() {
        let positions = vec![
            value_position(&holding("AAPL", dec!(10)), &available("AAPL", dec!(150.00))),
            value_position(&holding("MSFT", dec!(2)), &available("MSFT", dec!(300.00))),
        ];
        let snapshot = value_portfolio(positions, dec!(500.00));

        assert_eq!(snapshot.stock_total, dec!(2100.00));
        assert_eq!(snapshot.grand_total, dec!(2600.00));
        assert_eq!(
            snapshot.positions[0].percentage_of_portfolio,
            Some(dec!(71.43))
        );
        assert_eq!(
            snapshot.positions[1].percentage_of_portfolio,
            Some(dec!(28.57))
        );
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        let positions = vec![
            value_position(&holding("AAPL", dec!(10)), &available("AAPL", dec!(150.00))),
            value_position(&holding("MSFT", dec!(2)), &available("MSFT", dec!(300.00))),
            value_position(&holding("GOOGL", dec!(1)), &available("GOOGL", dec!(2700.00))),
        ];
        let snapshot = value_portfolio(positions, dec!(0));
        let sum: Decimal = snapshot
            .positions
            .iter()
            .filter_map(|p| p.percentage_of_portfolio)
            .sum();
        assert_eq!(sum, dec!(100.00));
    }

    #[test]
    fn test_partial_availability_excludes_unpriced() {
        let positions = vec![
            value_position(&holding("AAPL", dec!(10)), &available("AAPL", dec!(150.00))),
            value_position(&holding("MSFT", dec!(2)), &unavailable()),
        ];
        let snapshot = value_portfolio(positions, dec!(500.00));

        assert_eq!(snapshot.stock_total, dec!(1500.00));
        assert_eq!(snapshot.grand_total, dec!(2000.00));
        assert_eq!(
            snapshot.positions[0].percentage_of_portfolio,
            Some(dec!(100.00))
        );
        assert_eq!(snapshot.positions[1].percentage_of_portfolio, None);
    }

    #[test]
    fn test_all_unavailable_degrades_to_cash() {
        let positions = vec![
            value_position(&holding("AAPL", dec!(10)), &unavailable()),
            value_position(&holding("MSFT", dec!(2)), &unavailable()),
        ];
        let snapshot = value_portfolio(positions, dec!(500.00));

        assert_eq!(snapshot.stock_total, dec!(0));
        assert_eq!(snapshot.grand_total, dec!(500.00));
        assert!(snapshot
            .positions
            .iter()
            .all(|p| p.percentage_of_portfolio.is_none()));
    }

    #[test]
    fn test_grand_total_is_rounded_to_cents() {
        let snapshot = value_portfolio(Vec::new(), dec!(100.005));
        assert_eq!(snapshot.grand_total, dec!(100.01));
    }

    #[test]
    fn test_empty_portfolio_is_cash_only() {
        let snapshot = value_portfolio(Vec::new(), dec!(123.45));
        assert!(snapshot.positions.is_empty());
        assert_eq!(snapshot.stock_total, dec!(0));
        assert_eq!(snapshot.grand_total, dec!(123.45));
    }
}
