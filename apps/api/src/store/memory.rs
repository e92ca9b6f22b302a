//! In-memory `EntryStore` for tests. Records every applied update.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::models::mood_entry::{AnalysisStatus, MoodEntry};
use crate::store::{AnalysisUpdate, EntryStore, StoreError};

#[derive(Default)]
pub struct MemoryEntryStore {
    entries: Mutex<HashMap<String, MoodEntry>>,
    writes: Mutex<Vec<(String, AnalysisUpdate)>>,
    fail_completed_writes: AtomicBool,
    fail_failed_writes: AtomicBool,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, id: &str, user_id: &str, text: Option<&str>) -> Self {
        let entry = MoodEntry {
            id: id.to_string(),
            user_id: user_id.to_string(),
            text: text.map(str::to_string),
            emotion: None,
            confidence_score: None,
            analysis_status: AnalysisStatus::Pending,
            analyzed_at: None,
            created_at: Utc::now(),
        };
        self.insert(entry);
        self
    }

    pub fn insert(&self, entry: MoodEntry) {
        self.entries
            .lock()
            .unwrap()
            .insert(entry.id.clone(), entry);
    }

    pub fn entry(&self, id: &str) -> Option<MoodEntry> {
        self.entries.lock().unwrap().get(id).cloned()
    }

    pub fn writes(&self) -> Vec<(String, AnalysisUpdate)> {
        self.writes.lock().unwrap().clone()
    }

    pub fn fail_completed_writes(&self) {
        self.fail_completed_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_failed_writes(&self) {
        self.fail_failed_writes.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn get_entry(&self, entry_id: &str) -> Result<Option<MoodEntry>, StoreError> {
        Ok(self.entry(entry_id))
    }

    async fn update_analysis(
        &self,
        entry_id: &str,
        update: AnalysisUpdate,
    ) -> Result<(), StoreError> {
        let failing = match update {
            AnalysisUpdate::Completed(_) => &self.fail_completed_writes,
            AnalysisUpdate::Failed => &self.fail_failed_writes,
        };
        if failing.load(Ordering::SeqCst) {
            return Err(StoreError::Database(sqlx::Error::PoolTimedOut));
        }

        let mut entries = self.entries.lock().unwrap();
        let entry = entries
            .get_mut(entry_id)
            .ok_or_else(|| StoreError::EntryNotFound(entry_id.to_string()))?;

        match update {
            AnalysisUpdate::Completed(analysis) => {
                entry.emotion = Some(analysis.emotion);
                entry.confidence_score = Some(analysis.confidence_score);
                entry.analysis_status = AnalysisStatus::Completed;
            }
            AnalysisUpdate::Failed => entry.analysis_status = AnalysisStatus::Failed,
        }
        entry.analyzed_at = Some(Utc::now());

        self.writes
            .lock()
            .unwrap()
            .push((entry_id.to_string(), update));
        Ok(())
    }
}
