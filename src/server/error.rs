// src/server/error.rs

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

/// Errors a handler can return. Rendered as `{"error": "<message>"}`.
#[derive(Debug)]
pub enum AppError {
    /// The request body could not be turned into the expected shape.
    InvalidBody { status: StatusCode, message: String },
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidBody { status, message } => {
                warn!(%status, %message, "rejected request body");
                (status, message)
            }
        };

        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}
