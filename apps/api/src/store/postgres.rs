use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::mood_entry::{AnalysisStatus, MoodEntry, MoodEntryRow};
use crate::store::{AnalysisUpdate, EntryStore, StoreError};

/// `EntryStore` over the `mood_entries` table.
#[derive(Clone)]
pub struct PgEntryStore {
    pool: PgPool,
}

impl PgEntryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn get_entry(&self, entry_id: &str) -> Result<Option<MoodEntry>, StoreError> {
        let row: Option<MoodEntryRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, text, emotion, confidence_score,
                   analysis_status, analyzed_at, created_at
            FROM mood_entries
            WHERE id = $1
            "#,
        )
        .bind(entry_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(MoodEntry::from))
    }

    async fn update_analysis(
        &self,
        entry_id: &str,
        update: AnalysisUpdate,
    ) -> Result<(), StoreError> {
        let result = match update {
            AnalysisUpdate::Completed(analysis) => {
                sqlx::query(
                    r#"
                    UPDATE mood_entries
                    SET emotion = $2,
                        confidence_score = $3,
                        analysis_status = $4,
                        analyzed_at = NOW()
                    WHERE id = $1
                    "#,
                )
                .bind(entry_id)
                .bind(analysis.emotion.as_str())
                .bind(analysis.confidence_score)
                .bind(AnalysisStatus::Completed.as_str())
                .execute(&self.pool)
                .await?
            }
            AnalysisUpdate::Failed => {
                sqlx::query(
                    r#"
                    UPDATE mood_entries
                    SET analysis_status = $2,
                        analyzed_at = NOW()
                    WHERE id = $1
                    "#,
                )
                .bind(entry_id)
                .bind(AnalysisStatus::Failed.as_str())
                .execute(&self.pool)
                .await?
            }
        };

        if result.rows_affected() == 0 {
            return Err(StoreError::EntryNotFound(entry_id.to_string()));
        }
        Ok(())
    }
}
