use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;

use crate::{error::ApiResult, main_lib::AppState};
use folionest_core::imports::{ImportMode, ImportResult};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ImportRequest {
    #[serde(default = "default_mode")]
    mode: ImportMode,
    csv: String,
}

fn default_mode() -> ImportMode {
    ImportMode::Append
}

async fn import_holdings(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ImportRequest>,
) -> ApiResult<Json<ImportResult>> {
    let result = state.holdings_service.import_csv(&req.csv, req.mode)?;
    tracing::info!(
        "CSV import: {} imported, {} failed",
        result.imported,
        result.failed
    );
    Ok(Json(result))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/portfolio/import", post(import_holdings))
}
