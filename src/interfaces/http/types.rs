use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// Body shape shared by the session-scoped passthrough endpoints
/// (list-tables, recommend).
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ConnectResponse {
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub session_id: Option<String>,
    pub query_question: String,
}

#[derive(Debug, Deserialize)]
pub struct ExecuteRequest {
    pub session_id: Option<String>,
    /// Original natural-language question, kept for the history entry.
    #[serde(default)]
    pub question: String,
    pub query: String,
    #[serde(default)]
    pub values: HashMap<String, String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SaveQueryRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub question: String,
    pub sql: String,
    pub execution_time_ms: Option<u64>,
    pub result_rows: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryListQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SavedListQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct UnfilledBody {
    pub error: String,
    pub missing_placeholders: Vec<String>,
}
