use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Llm(e) => llm_parts(e),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

fn llm_parts(e: &LlmError) -> (StatusCode, &'static str, String) {
    let (status, message) = match e {
        LlmError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        LlmError::ConfigurationMissing => {
            tracing::error!("LLM error: {e}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "The AI service is not configured".to_string(),
            )
        }
        LlmError::Timeout { .. } => (
            StatusCode::GATEWAY_TIMEOUT,
            "Request timed out. Please try again.".to_string(),
        ),
        LlmError::NetworkUnreachable(_) => (
            StatusCode::BAD_GATEWAY,
            "Unable to reach the AI service. Please check your network connection.".to_string(),
        ),
        LlmError::Network(_) => (
            StatusCode::BAD_GATEWAY,
            "Network request to the AI service failed".to_string(),
        ),
        LlmError::UpstreamRejected { status, message } => (
            StatusCode::BAD_GATEWAY,
            format!("AI service error: {status} - {message}"),
        ),
        LlmError::MalformedResponse(_) | LlmError::EmptyContent => {
            tracing::error!("LLM error: {e}");
            (
                StatusCode::BAD_GATEWAY,
                "The AI service returned an unusable response".to_string(),
            )
        }
    };
    (status, e.code(), message)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let mut body = json!({
            "error": {
                "code": code,
                "message": message
            }
        });
        if let AppError::Llm(LlmError::UpstreamRejected {
            status: upstream, ..
        }) = &self
        {
            body["error"]["upstream_status"] = json!(upstream);
        }

        (status, Json(body)).into_response()
    }
}
