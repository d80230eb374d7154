//! Context Builder — renders the text block prepended to every model prompt.

use crate::chat::prompts::{CONTEXT_PREAMBLE_TEMPLATE, HISTORY_HEADER};
use crate::models::conversation::ConversationTurn;

#[derive(Debug, Clone)]
pub struct ContextBuilder {
    owner: String,
    /// When set, only the most recent `n` turns are rendered.
    history_window: Option<usize>,
}

impl ContextBuilder {
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            history_window: None,
        }
    }

    pub fn with_history_window(mut self, window: Option<usize>) -> Self {
        self.history_window = window;
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Embeds `document_text` verbatim and, when there is history, a
    /// `User:`/`Assistant:` transcript in original order.
    pub fn build(&self, document_text: &str, history: &[ConversationTurn]) -> String {
        let mut context = CONTEXT_PREAMBLE_TEMPLATE
            .replace("{owner}", &self.owner)
            .replace("{resume_text}", document_text);

        let history = match self.history_window {
            Some(window) => &history[history.len().saturating_sub(window)..],
            None => history,
        };

        if !history.is_empty() {
            context.push_str(HISTORY_HEADER);
            for turn in history {
                context.push_str(&format!(
                    "User: {}\nAssistant: {}\n",
                    turn.question, turn.answer
                ));
            }
        }

        context
    }
}
