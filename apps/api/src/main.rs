use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use resumebot::config::Config;
use resumebot::routes::build_router;
use resumebot::state::AppState;
use resumebot::{build_assistant, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing API_KEY)
    let config = Config::from_env()?;

    telemetry::init(&config.rust_log);

    info!("Starting resumebot API v{}", env!("CARGO_PKG_VERSION"));

    let assistant = build_assistant(&config)?;

    // Warm the document cache; a failure here is retried on the first question.
    if let Err(e) = assistant.document().text().await {
        warn!("Document not loaded at startup: {e}");
    }

    info!(
        "Session TTL: {}s, generation timeout: {}s",
        config.session_ttl_secs, config.generation_timeout_secs
    );

    let state = AppState {
        assistant: Arc::new(assistant),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
