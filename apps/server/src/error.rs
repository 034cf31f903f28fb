//! HTTP error mapping.
//!
//! One error type for every handler: core NotFound becomes 404,
//! validation failures 400, chat provider failures 502, everything else
//! 500 with the detail logged rather than leaked.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use folionest_ai::AiError;
use folionest_core::Error as CoreError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_not_found() {
            return ApiError::new(StatusCode::NOT_FOUND, err.to_string());
        }
        match err {
            CoreError::Validation(_) => ApiError::new(StatusCode::BAD_REQUEST, err.to_string()),
            other => {
                tracing::error!("Internal error: {}", other);
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::InvalidInput(_) => ApiError::new(StatusCode::BAD_REQUEST, err.to_string()),
            AiError::Core(core) => ApiError::from(core),
            other => {
                tracing::error!("Chat provider error: {}", other);
                ApiError::new(StatusCode::BAD_GATEWAY, other.to_string())
            }
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        tracing::error!("Internal error: {:#}", err);
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
