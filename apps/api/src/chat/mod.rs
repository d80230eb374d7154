// Conversational assistant: session bookkeeping, context rendering and the
// completion gateway, composed by `service::Assistant`.
// All model calls go through llm_client — nothing here talks HTTP directly.

use std::time::Duration;

use thiserror::Error;

use crate::document::DocumentError;

pub mod context;
pub mod gateway;
pub mod handlers;
pub mod prompts;
pub mod service;
pub mod session;

/// Failure kinds surfaced by the assistant to both front ends.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("Document unreadable: {0}")]
    DocumentUnreadable(#[from] DocumentError),

    #[error("Generation failed: {0}")]
    GenerationFailure(String),

    #[error("Generation timed out after {}s", .0.as_secs())]
    GenerationTimeout(Duration),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}
