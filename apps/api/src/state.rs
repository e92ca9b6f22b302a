use std::sync::Arc;

use crate::llm_client::CompletionProvider;
use crate::store::EntryStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EntryStore>,
    /// Process-wide completion client; see `llm_client::shared_client`.
    pub llm: Arc<dyn CompletionProvider>,
}
