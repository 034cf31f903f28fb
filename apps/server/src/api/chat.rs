use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};
use folionest_ai::{ChatMessage, ChatReply};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatRequest {
    messages: Vec<ChatMessage>,
}

async fn send_chat(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatReply>> {
    let chat = state.chat_service.as_ref().ok_or_else(|| {
        ApiError::new(
            StatusCode::BAD_GATEWAY,
            "No API key configured for the chat provider",
        )
    })?;
    let reply = chat.send(&req.messages).await?;
    Ok(Json(reply))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/chat", post(send_chat))
}
