use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tabular result returned by the query-execution collaborator.
///
/// Column order is significant; each row maps column name to a scalar JSON
/// value (text, number, boolean or null).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<HashMap<String, serde_json::Value>>,
}

impl QueryResult {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Table metadata from the schema-listing collaborator, consumed for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableInfo {
    pub name: String,
    pub row_count: i64,
    pub columns_count: i64,
}

/// A sample question suggested by the generation collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedQuestion {
    pub question: String,
}
