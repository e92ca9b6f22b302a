pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Host trigger: fired once per created entry
        .route(
            "/internal/triggers/mood-entry-created",
            post(handlers::handle_entry_created),
        )
        // Callable: owner-initiated re-analysis
        .route(
            "/api/v1/mood-entries/retry-analysis",
            post(handlers::handle_retry_analysis),
        )
        .with_state(state)
}
