//! Assistant — the resolve → build → complete → append sequence shared by the
//! HTTP handlers and the CLI loop.

use serde::Serialize;
use tracing::{debug, warn};

use crate::chat::context::ContextBuilder;
use crate::chat::gateway::CompletionGateway;
use crate::chat::prompts::GREETING_TEMPLATE;
use crate::chat::session::SessionStore;
use crate::chat::AssistantError;
use crate::document::DocumentCache;

/// Reply to one question, with the session it was recorded under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub response: String,
    pub session_id: String,
}

pub struct Assistant {
    sessions: SessionStore,
    document: DocumentCache,
    builder: ContextBuilder,
    gateway: CompletionGateway,
}

impl Assistant {
    pub fn new(
        sessions: SessionStore,
        document: DocumentCache,
        builder: ContextBuilder,
        gateway: CompletionGateway,
    ) -> Self {
        Self {
            sessions,
            document,
            builder,
            gateway,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn document(&self) -> &DocumentCache {
        &self.document
    }

    pub fn greeting(&self) -> String {
        GREETING_TEMPLATE.replace("{owner}", self.builder.owner())
    }

    /// Answers `question` within the given (or a new) session.
    ///
    /// A turn is appended only after the model replied; any earlier failure
    /// leaves the session's history untouched.
    pub async fn ask(
        &self,
        question: &str,
        session_id: Option<String>,
    ) -> Result<Answer, AssistantError> {
        if question.trim().is_empty() {
            return Err(AssistantError::Validation(
                "text cannot be empty".to_string(),
            ));
        }
        // An empty id is treated like a missing one.
        let session_id = session_id.filter(|id| !id.is_empty());

        self.sessions.prune();
        let (session_id, history) = self.sessions.resolve_or_create(session_id);
        debug!(
            "Answering in session {session_id} ({} prior turns)",
            history.len()
        );

        let document_text = self.document.text().await?;
        let context = self.builder.build(document_text, &history);
        let response = self.gateway.complete(&context, question).await?;

        if !self.sessions.append(&session_id, question, &response) {
            warn!("Session {session_id} expired before its turn could be recorded");
        }

        Ok(Answer {
            response,
            session_id,
        })
    }

    pub fn end_session(&self, session_id: &str) -> Result<(), AssistantError> {
        if self.sessions.delete(session_id) {
            Ok(())
        } else {
            Err(AssistantError::SessionNotFound(session_id.to_string()))
        }
    }
}
