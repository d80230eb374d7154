//! resumebot — answers questions about a résumé through a hosted LLM.
//!
//! The HTTP server (`resumebot`) and the interactive CLI (`resumebot-cli`)
//! both drive the same `chat::service::Assistant`.

pub mod chat;
pub mod cli;
pub mod config;
pub mod document;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
pub mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::chat::context::ContextBuilder;
use crate::chat::gateway::CompletionGateway;
use crate::chat::service::Assistant;
use crate::chat::session::SessionStore;
use crate::config::Config;
use crate::document::DocumentCache;
use crate::llm_client::LlmClient;

/// Wires the assistant from configuration using the Gemini client.
pub fn build_assistant(config: &Config) -> Result<Assistant> {
    let llm = LlmClient::new(
        config.api_key.clone(),
        config.model.clone(),
        config.api_base.clone(),
    )?;
    tracing::info!("LLM client initialized (model: {})", llm.model());

    let sessions = SessionStore::with_system_clock(config.session_ttl());
    let document = DocumentCache::new(config.resume_path.clone());
    let builder =
        ContextBuilder::new(config.owner_name.clone()).with_history_window(config.history_window);
    let gateway = CompletionGateway::new(
        Arc::new(llm),
        config.owner_name.clone(),
        Duration::from_secs(config.generation_timeout_secs),
    );

    Ok(Assistant::new(sessions, document, builder, gateway))
}
