use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::analysis::emotion::Emotion;

/// Where an entry stands in its analysis lifecycle.
/// `Pending` is never written; it is what an unset status means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    Pending,
    Completed,
    Failed,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Pending => "pending",
            AnalysisStatus::Completed => "completed",
            AnalysisStatus::Failed => "failed",
        }
    }

    fn from_column(value: Option<&str>) -> AnalysisStatus {
        match value {
            Some("completed") => AnalysisStatus::Completed,
            Some("failed") => AnalysisStatus::Failed,
            _ => AnalysisStatus::Pending,
        }
    }
}

/// Row shape of `mood_entries`.
#[derive(Debug, Clone, FromRow)]
pub struct MoodEntryRow {
    pub id: String,
    pub user_id: String,
    pub text: Option<String>,
    pub emotion: Option<String>,
    pub confidence_score: Option<f64>,
    pub analysis_status: Option<String>,
    pub analyzed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A journal entry as seen by the analyzer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    pub user_id: String,
    pub text: Option<String>,
    pub emotion: Option<Emotion>,
    pub confidence_score: Option<f64>,
    pub analysis_status: AnalysisStatus,
    pub analyzed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// `None` for missing or empty text.
pub fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

impl From<MoodEntryRow> for MoodEntry {
    fn from(row: MoodEntryRow) -> Self {
        MoodEntry {
            // Labels written by older taxonomies read back as absent.
            emotion: row.emotion.as_deref().and_then(Emotion::from_label),
            analysis_status: AnalysisStatus::from_column(row.analysis_status.as_deref()),
            id: row.id,
            user_id: row.user_id,
            text: row.text,
            confidence_score: row.confidence_score,
            analyzed_at: row.analyzed_at,
            created_at: row.created_at,
        }
    }
}
