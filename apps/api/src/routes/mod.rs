pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::handle_root))
        .route("/health", get(health::health_handler))
        .route("/ask", post(handlers::handle_ask))
        .route("/session/:session_id", delete(handlers::handle_end_session))
        .with_state(state)
}
