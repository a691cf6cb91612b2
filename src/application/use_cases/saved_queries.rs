//! In-memory saved-queries store
//!
//! Backs the saved-queries screen: keep a generated query under a title,
//! search it later, delete it. Process-local, same as history.

use crate::domain::error::{AppError, Result};
use crate::domain::saved_query::SavedQuery;
use chrono::Utc;
use std::sync::RwLock;
use uuid::Uuid;

pub struct SaveQueryInput {
    pub title: String,
    pub description: String,
    pub question: String,
    pub sql: String,
    pub execution_time_ms: Option<u64>,
    pub result_rows: Option<usize>,
}

#[derive(Default)]
pub struct SavedQueryService {
    queries: RwLock<Vec<SavedQuery>>,
}

impl SavedQueryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, input: SaveQueryInput) -> Result<SavedQuery> {
        if input.title.trim().is_empty() {
            return Err(AppError::ValidationError("Title is required".to_string()));
        }
        if input.sql.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Cannot save a query without SQL".to_string(),
            ));
        }

        let saved = SavedQuery {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            description: input.description,
            question: input.question,
            sql: input.sql,
            execution_time_ms: input.execution_time_ms,
            result_rows: input.result_rows,
            created_at: Utc::now(),
        };
        let mut queries = self.queries.write().unwrap_or_else(|e| e.into_inner());
        queries.insert(0, saved.clone());
        Ok(saved)
    }

    /// All saved queries newest first; a non-empty search term filters by
    /// title, description or question, case-insensitively.
    pub fn list(&self, search: Option<&str>) -> Vec<SavedQuery> {
        let queries = self.queries.read().unwrap_or_else(|e| e.into_inner());
        match search.map(str::trim).filter(|s| !s.is_empty()) {
            Some(term) => queries.iter().filter(|q| q.matches(term)).cloned().collect(),
            None => queries.clone(),
        }
    }

    pub fn get(&self, id: &str) -> Result<SavedQuery> {
        let queries = self.queries.read().unwrap_or_else(|e| e.into_inner());
        queries
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Saved query not found: {}", id)))
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        let mut queries = self.queries.write().unwrap_or_else(|e| e.into_inner());
        let before = queries.len();
        queries.retain(|q| q.id != id);
        if queries.len() == before {
            return Err(AppError::NotFound(format!("Saved query not found: {}", id)));
        }
        Ok(())
    }
}
