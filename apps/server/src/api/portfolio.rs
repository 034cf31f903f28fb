use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::{error::ApiResult, main_lib::AppState};
use folionest_core::portfolio::{PositionValuation, ValuationSnapshot};

/// Whole-portfolio valuation. Pricing failures degrade individual
/// positions; this endpoint never errors because a quote is missing.
async fn get_portfolio(State(state): State<Arc<AppState>>) -> ApiResult<Json<ValuationSnapshot>> {
    let snapshot = state.portfolio_service.get_portfolio().await?;
    Ok(Json(snapshot))
}

async fn get_position(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<Json<PositionValuation>> {
    let position = state.portfolio_service.get_position(&symbol).await?;
    Ok(Json(position))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio", get(get_portfolio))
        .route("/portfolio/positions/{symbol}", get(get_position))
}
