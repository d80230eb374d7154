//! Axum route handlers for the assistant.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::chat::service::Answer;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub text: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// GET /
pub async fn handle_root(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "message": state.assistant.greeting() }))
}

/// POST /ask
///
/// Answers a question, creating a session when `session_id` is absent.
/// Malformed bodies are reported as validation errors in the usual error shape.
pub async fn handle_ask(
    State(state): State<AppState>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Result<Json<Answer>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let answer = state
        .assistant
        .ask(&request.text, request.session_id)
        .await?;
    Ok(Json(answer))
}

/// DELETE /session/:session_id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    state.assistant.end_session(&session_id)?;
    Ok(Json(json!({ "message": "Session ended successfully" })))
}
