//! Portfolio query service.
//!
//! Reads holdings and cash, fetches quotes concurrently, and runs the
//! valuation engine. Pricing failures degrade individual positions but
//! never fail the request; only storage errors propagate.

use async_trait::async_trait;
use futures::future::join_all;
use log::debug;
use std::sync::Arc;

use super::valuation::{value_portfolio, value_position, PositionValuation, ValuationSnapshot};
use crate::errors::{Error, Result};
use crate::holdings::{normalize_symbol, HoldingsRepositoryTrait};
use crate::quotes::QuoteServiceTrait;
use crate::settings::SettingsServiceTrait;

/// Read-side portfolio operations exposed to the API layer.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Value the whole portfolio at the latest available prices.
    async fn get_portfolio(&self) -> Result<ValuationSnapshot>;

    /// Value one position. The numbers come from the same full-portfolio
    /// valuation as `get_portfolio`, so the percentage a caller sees here
    /// matches what the whole-portfolio view reports at the same instant.
    async fn get_position(&self, symbol: &str) -> Result<PositionValuation>;
}

pub struct PortfolioService {
    holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
    quote_service: Arc<dyn QuoteServiceTrait>,
}

impl PortfolioService {
    pub fn new(
        holdings_repository: Arc<dyn HoldingsRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
        quote_service: Arc<dyn QuoteServiceTrait>,
    ) -> Self {
        Self {
            holdings_repository,
            settings_service,
            quote_service,
        }
    }

    async fn value_current_holdings(&self) -> Result<ValuationSnapshot> {
        let holdings = self.holdings_repository.list()?;
        let cash = self.settings_service.get_cash()?;

        debug!("Valuing {} holdings", holdings.len());

        let fetches = join_all(
            holdings
                .iter()
                .map(|h| self.quote_service.fetch_price(&h.symbol)),
        )
        .await;

        let positions = holdings
            .iter()
            .zip(fetches.iter())
            .map(|(holding, fetch)| value_position(holding, fetch))
            .collect();

        Ok(value_portfolio(positions, cash))
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_portfolio(&self) -> Result<ValuationSnapshot> {
        self.value_current_holdings().await
    }

    async fn get_position(&self, symbol: &str) -> Result<PositionValuation> {
        let sym = normalize_symbol(symbol)?;
        let snapshot = self.value_current_holdings().await?;
        snapshot
            .positions
            .into_iter()
            .find(|p| p.symbol == sym)
            .ok_or_else(|| Error::not_found(format!("Holding {} not found", sym)))
    }
}
