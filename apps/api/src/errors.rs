use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::chat::AssistantError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("LLM timeout: {0}")]
    LlmTimeout(String),

    #[error("Document error: {0}")]
    Document(String),
}

impl From<AssistantError> for AppError {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::Validation(msg) => AppError::Validation(msg),
            AssistantError::SessionNotFound(_) => AppError::NotFound("Session not found".to_string()),
            AssistantError::GenerationFailure(msg) => AppError::Llm(msg),
            e @ AssistantError::GenerationTimeout(_) => AppError::LlmTimeout(e.to_string()),
            AssistantError::DocumentUnreadable(e) => AppError::Document(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "LLM_ERROR", msg.clone())
            }
            AppError::LlmTimeout(msg) => {
                tracing::error!("LLM timeout: {msg}");
                (StatusCode::GATEWAY_TIMEOUT, "LLM_TIMEOUT", msg.clone())
            }
            AppError::Document(msg) => {
                tracing::error!("Document error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "DOCUMENT_ERROR", msg.clone())
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_session_not_found_maps_to_404() {
        let response = AppError::from(AssistantError::SessionNotFound("s1".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_generation_failure_maps_to_500() {
        let err = AppError::from(AssistantError::GenerationFailure("quota".to_string()));
        assert!(matches!(&err, AppError::Llm(msg) if msg == "quota"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_timeout_maps_to_504() {
        let response =
            AppError::from(AssistantError::GenerationTimeout(Duration::from_secs(60))).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::from(AssistantError::Validation("empty".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
