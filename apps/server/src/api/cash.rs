use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CashBalance {
    cash: Decimal,
}

async fn get_cash(State(state): State<Arc<AppState>>) -> ApiResult<Json<CashBalance>> {
    let cash = state.settings_service.get_cash()?;
    Ok(Json(CashBalance { cash }))
}

async fn set_cash(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CashBalance>,
) -> ApiResult<Json<CashBalance>> {
    let cash = state.settings_service.set_cash(req.cash)?;
    Ok(Json(CashBalance { cash }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio/cash", get(get_cash).put(set_cash))
}
