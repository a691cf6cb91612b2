//! In-memory query history
//!
//! Every executed query is recorded here, success or failure, newest first.
//! Storage is process-local by design: history does not survive a restart.

use crate::domain::error::{AppError, Result};
use crate::domain::saved_query::{HistoryEntry, QueryStatus};
use chrono::Utc;
use std::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

#[derive(Default)]
pub struct HistoryService {
    entries: RwLock<Vec<HistoryEntry>>,
}

impl HistoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &self,
        question: &str,
        sql: &str,
        status: QueryStatus,
        row_count: usize,
        execution_time_ms: u64,
    ) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            question: question.to_string(),
            sql: sql.to_string(),
            status,
            row_count,
            execution_time_ms,
            created_at: Utc::now(),
        };
        debug!(entry_id = %entry.id, ?status, "Recording history entry");
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(0, entry.clone());
        entry
    }

    /// Entries newest first, optionally capped.
    pub fn list(&self, limit: Option<usize>) -> Vec<HistoryEntry> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        match limit {
            Some(n) => entries.iter().take(n).cloned().collect(),
            None => entries.clone(),
        }
    }

    pub fn get(&self, id: &str) -> Result<HistoryEntry> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("History entry not found: {}", id)))
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Err(AppError::NotFound(format!(
                "History entry not found: {}",
                id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_list_newest_first() {
        let history = HistoryService::new();
        history.record("q1", "SELECT 1", QueryStatus::Completed, 1, 10);
        history.record("q2", "SELECT 2", QueryStatus::Failed, 0, 5);

        let entries = history.list(None);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].question, "q2");
        assert_eq!(entries[1].question, "q1");
    }

    #[test]
    fn test_list_with_limit() {
        let history = HistoryService::new();
        for i in 0..5 {
            history.record(&format!("q{}", i), "SELECT 1", QueryStatus::Completed, 0, 1);
        }
        assert_eq!(history.list(Some(3)).len(), 3);
    }

    #[test]
    fn test_get_and_delete() {
        let history = HistoryService::new();
        let entry = history.record("q", "SELECT 1", QueryStatus::Completed, 2, 7);

        assert_eq!(history.get(&entry.id).unwrap().row_count, 2);
        history.delete(&entry.id).unwrap();
        assert!(history.get(&entry.id).is_err());
        assert!(history.delete(&entry.id).is_err());
    }
}
