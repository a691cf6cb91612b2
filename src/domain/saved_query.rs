use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Completed,
    Failed,
}

/// One executed query as shown on the history screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub question: String,
    pub sql: String,
    pub status: QueryStatus,
    pub row_count: usize,
    pub execution_time_ms: u64,
    pub created_at: DateTime<Utc>,
}

/// A query the user chose to keep for later reuse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedQuery {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub question: String,
    pub sql: String,
    pub execution_time_ms: Option<u64>,
    pub result_rows: Option<usize>,
    pub created_at: DateTime<Utc>,
}

impl SavedQuery {
    /// Case-insensitive match against title, description and question,
    /// mirroring the saved-queries search box.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.question.to_lowercase().contains(&term)
    }
}
