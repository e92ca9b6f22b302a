//! Manual retry: an owner re-runs analysis for one of their entries.
//!
//! Preconditions are checked in a fixed order, each with its own reason code.
//! A classifier failure is returned as `internal` and leaves the stored status
//! as it was, so a failed retry never clobbers an earlier `completed` result.

use serde::{Deserialize, Serialize};

use crate::analysis::emotion::Emotion;
use crate::analysis::pipeline::{classify_and_persist, FailurePolicy};
use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::llm_client::CompletionProvider;
use crate::store::EntryStore;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryAnalysisRequest {
    #[serde(default)]
    pub entry_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryAnalysisResponse {
    pub success: bool,
    pub emotion: Emotion,
    pub confidence_score: f64,
}

/// Re-runs analysis for `request.entry_id` on behalf of `caller`.
pub async fn retry_entry_analysis(
    store: &dyn EntryStore,
    provider: &dyn CompletionProvider,
    caller: Option<&CallerIdentity>,
    request: &RetryAnalysisRequest,
) -> Result<RetryAnalysisResponse, AppError> {
    let caller = caller
        .ok_or_else(|| AppError::Unauthenticated("User must be authenticated".to_string()))?;

    let entry_id = request
        .entry_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::InvalidArgument("Entry ID is required".to_string()))?;

    let entry = store
        .get_entry(entry_id)
        .await
        .map_err(|e| {
            tracing::error!("Error retrying analysis for {entry_id}: {e}");
            AppError::Internal("Failed to retry analysis".to_string())
        })?
        .ok_or_else(|| AppError::NotFound("Mood entry not found".to_string()))?;

    if entry.user_id != caller.uid {
        return Err(AppError::PermissionDenied(
            "You do not have permission to retry this analysis".to_string(),
        ));
    }

    let analysis = classify_and_persist(
        store,
        provider,
        entry_id,
        entry.text.as_deref(),
        FailurePolicy::SurfaceOnly,
    )
    .await
    .map_err(|e| AppError::from_analysis(e, "Failed to retry analysis"))?;

    Ok(RetryAnalysisResponse {
        success: true,
        emotion: analysis.emotion,
        confidence_score: analysis.confidence_score,
    })
}
