use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{patch, post},
    Json, Router,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use folionest_core::holdings::{Holding, HoldingInput};

async fn add_holding(
    State(state): State<Arc<AppState>>,
    Json(input): Json<HoldingInput>,
) -> ApiResult<(StatusCode, Json<Holding>)> {
    let holding = state.holdings_service.add_or_increment(input)?;
    Ok((StatusCode::CREATED, Json(holding)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SetQuantityRequest {
    quantity: Decimal,
}

async fn set_quantity(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
    Json(req): Json<SetQuantityRequest>,
) -> ApiResult<Json<Holding>> {
    let holding = state.holdings_service.set_quantity(&symbol, req.quantity)?;
    Ok(Json(holding))
}

async fn delete_holding(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> ApiResult<StatusCode> {
    state.holdings_service.delete_holding(&symbol)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/portfolio/holdings", post(add_holding))
        .route(
            "/portfolio/holdings/{symbol}",
            patch(set_quantity).delete(delete_holding),
        )
}
