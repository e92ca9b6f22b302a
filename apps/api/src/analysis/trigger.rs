//! Automatic analyzer: runs once per entry-created event delivered by the host.
//!
//! Any failure is returned to the host after a best-effort `failed` write; the
//! host's own retry policy re-delivers the event. No retry loop here.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::classifier::EmotionAnalysis;
use crate::analysis::pipeline::{classify_and_persist, AnalysisError, FailurePolicy};
use crate::llm_client::CompletionProvider;
use crate::store::EntryStore;

/// Snapshot of the created entry, as delivered by the host trigger.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntrySnapshot {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCreatedEvent {
    pub entry_id: String,
    #[serde(default)]
    pub entry: EntrySnapshot,
}

/// Advisory success summary returned to the host.
#[derive(Debug, Serialize)]
pub struct TriggerResponse {
    pub success: bool,
    pub analysis: EmotionAnalysis,
}

/// Analyzes a newly created entry using the text carried in the event.
pub async fn analyze_new_entry(
    store: &dyn EntryStore,
    provider: &dyn CompletionProvider,
    event: &EntryCreatedEvent,
) -> Result<TriggerResponse, AnalysisError> {
    info!(
        "Analyzing mood entry: {} (owner: {})",
        event.entry_id,
        event.entry.user_id.as_deref().unwrap_or("unknown")
    );

    let analysis = classify_and_persist(
        store,
        provider,
        &event.entry_id,
        event.entry.text.as_deref(),
        FailurePolicy::RecordFailure,
    )
    .await?;

    Ok(TriggerResponse {
        success: true,
        analysis,
    })
}
