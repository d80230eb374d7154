use std::sync::Arc;

use crate::chat::service::Assistant;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Owns the session store and document cache; one per process.
    pub assistant: Arc<Assistant>,
}
