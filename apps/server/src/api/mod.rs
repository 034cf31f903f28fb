//! HTTP routing.

mod cash;
mod chat;
mod health;
mod holdings;
mod imports;
mod portfolio;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(portfolio::router())
        .merge(holdings::router())
        .merge(cash::router())
        .merge(imports::router())
        .merge(chat::router())
        .merge(health::router());

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
