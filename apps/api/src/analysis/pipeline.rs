//! Classify-and-persist: the one operation both entry points run.
//!
//! The entry points differ only in what happens to the stored status when an
//! attempt fails, captured by `FailurePolicy`.

use thiserror::Error;
use tracing::{error, info};

use crate::analysis::classifier::{classify_emotion, ClassifyError, EmotionAnalysis};
use crate::llm_client::CompletionProvider;
use crate::models::mood_entry::non_empty;
use crate::store::{AnalysisUpdate, EntryStore, StoreError};

/// What to write when an attempt fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Best-effort `failed` status write, then return the original error.
    RecordFailure,
    /// Return the error; leave the stored status untouched.
    SurfaceOnly,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Mood entry has no text to analyze")]
    MissingText,

    #[error(transparent)]
    Classification(#[from] ClassifyError),

    #[error("Failed to store analysis: {0}")]
    Store(#[from] StoreError),
}

/// Classifies `text` and writes the outcome to `entry_id`.
///
/// Missing or empty text fails without calling the provider. On success the
/// entry is `completed`; on failure `policy` decides whether `failed` is written.
/// A failing `failed` write is logged and never replaces the original error.
pub async fn classify_and_persist(
    store: &dyn EntryStore,
    provider: &dyn CompletionProvider,
    entry_id: &str,
    text: Option<&str>,
    policy: FailurePolicy,
) -> Result<EmotionAnalysis, AnalysisError> {
    let outcome = attempt(store, provider, entry_id, text).await;

    if let Err(err) = &outcome {
        error!("Error analyzing mood entry {entry_id}: {err}");
        if policy == FailurePolicy::RecordFailure {
            if let Err(update_err) = store
                .update_analysis(entry_id, AnalysisUpdate::Failed)
                .await
            {
                error!("Failed to update entry status for {entry_id}: {update_err}");
            }
        }
    }

    outcome
}

async fn attempt(
    store: &dyn EntryStore,
    provider: &dyn CompletionProvider,
    entry_id: &str,
    text: Option<&str>,
) -> Result<EmotionAnalysis, AnalysisError> {
    let text = non_empty(text).ok_or(AnalysisError::MissingText)?;

    let analysis = classify_emotion(text, provider).await?;

    store
        .update_analysis(entry_id, AnalysisUpdate::Completed(analysis))
        .await?;

    info!(
        "Successfully analyzed mood entry {entry_id}: {} ({})",
        analysis.emotion, analysis.confidence_score
    );
    Ok(analysis)
}
