use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::main_lib::AppState;
use folionest_core::quotes::{QuoteFetch, UnavailableReason};

/// Symbol used to exercise the quote source end to end.
const PROBE_SYMBOL: &str = "AAPL";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthStatus {
    status: &'static str,
    quote_provider: &'static str,
}

async fn get_health(State(state): State<Arc<AppState>>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        quote_provider: state.quote_provider_id,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QuoteProbe {
    quote_provider: &'static str,
    symbol: &'static str,
    connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<UnavailableReason>,
}

/// Live connectivity check: fetch one real quote through the configured
/// provider. Always answers 200; the body says whether pricing works.
async fn probe_quote_source(State(state): State<Arc<AppState>>) -> Json<QuoteProbe> {
    let (connected, price, reason) = match state.quote_service.fetch_price(PROBE_SYMBOL).await {
        QuoteFetch::Available(quote) => (true, Some(quote.price), None),
        QuoteFetch::Unavailable(why) => (false, None, Some(why)),
    };
    Json(QuoteProbe {
        quote_provider: state.quote_provider_id,
        symbol: PROBE_SYMBOL,
        connected,
        price,
        reason,
    })
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(get_health))
        .route("/health/quotes", get(probe_quote_source))
}
