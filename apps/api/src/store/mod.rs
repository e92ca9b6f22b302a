//! Document store: read one entry, overwrite its analysis fields.
//!
//! `AppState` holds an `Arc<dyn EntryStore>`; Postgres in production.
//! Timestamps for `analyzed_at` are assigned by the store, not the caller.

use async_trait::async_trait;
use thiserror::Error;

use crate::analysis::classifier::EmotionAnalysis;
use crate::models::mood_entry::MoodEntry;

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Mood entry {0} does not exist")]
    EntryNotFound(String),
}

/// The fields one analysis attempt writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnalysisUpdate {
    /// Sets emotion, confidence, `completed`, and a fresh `analyzed_at`.
    Completed(EmotionAnalysis),
    /// Sets `failed` and a fresh `analyzed_at`. Prior emotion/confidence are kept.
    Failed,
}

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn get_entry(&self, entry_id: &str) -> Result<Option<MoodEntry>, StoreError>;

    /// Applies `update` atomically. Errors with `EntryNotFound` if the entry is gone.
    async fn update_analysis(
        &self,
        entry_id: &str,
        update: AnalysisUpdate,
    ) -> Result<(), StoreError>;
}
