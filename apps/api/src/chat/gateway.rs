//! Completion Gateway — wraps the rendered context and the question into the
//! final prompt and hands it to the text generator under a bounded timeout.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::chat::prompts::completion_prompt;
use crate::chat::AssistantError;
use crate::llm_client::TextGenerator;

pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 60;

#[derive(Clone)]
pub struct CompletionGateway {
    generator: Arc<dyn TextGenerator>,
    owner: String,
    timeout: Duration,
}

impl CompletionGateway {
    pub fn new(generator: Arc<dyn TextGenerator>, owner: impl Into<String>, timeout: Duration) -> Self {
        Self {
            generator,
            owner: owner.into(),
            timeout,
        }
    }

    pub fn render_prompt(&self, context: &str, question: &str) -> String {
        completion_prompt(&self.owner, context, question)
    }

    /// Returns the model's text verbatim.
    pub async fn complete(&self, context: &str, question: &str) -> Result<String, AssistantError> {
        let prompt = self.render_prompt(context, question);

        match tokio::time::timeout(self.timeout, self.generator.generate(&prompt)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(AssistantError::GenerationFailure(e.to_string())),
            Err(_) => {
                warn!("Generation call exceeded {}s", self.timeout.as_secs());
                Err(AssistantError::GenerationTimeout(self.timeout))
            }
        }
    }
}
