//! Axum route handlers for the entry-created trigger and the manual retry endpoint.

use axum::{extract::State, Json};

use crate::analysis::retry::{retry_entry_analysis, RetryAnalysisRequest, RetryAnalysisResponse};
use crate::analysis::trigger::{analyze_new_entry, EntryCreatedEvent, TriggerResponse};
use crate::auth::CallerIdentity;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /internal/triggers/mood-entry-created
/// Any non-2xx response asks the host to re-deliver the event.
pub async fn handle_entry_created(
    State(state): State<AppState>,
    Json(event): Json<EntryCreatedEvent>,
) -> Result<Json<TriggerResponse>, AppError> {
    let response = analyze_new_entry(state.store.as_ref(), state.llm.as_ref(), &event)
        .await
        .map_err(|e| AppError::from_analysis(e, "Failed to analyze mood entry"))?;
    Ok(Json(response))
}

/// POST /api/v1/mood-entries/retry-analysis
///
/// Identity and body are both optional at the extractor level so that the
/// precondition order (authentication before arguments) is decided here.
pub async fn handle_retry_analysis(
    State(state): State<AppState>,
    caller: Option<CallerIdentity>,
    body: Option<Json<RetryAnalysisRequest>>,
) -> Result<Json<RetryAnalysisResponse>, AppError> {
    let request = body.map(|Json(req)| req).unwrap_or_default();
    let response = retry_entry_analysis(
        state.store.as_ref(),
        state.llm.as_ref(),
        caller.as_ref(),
        &request,
    )
    .await?;
    Ok(Json(response))
}
