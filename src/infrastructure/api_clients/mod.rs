//! HTTP clients for the remote collaborators
//!
//! Three upstream services sit behind this module: the auth backend, the
//! database backend (connections, schema listing, query execution) and the
//! LLM generation backend. All failures are opaque from the gateway's point
//! of view and map to `AppError::UpstreamError`.

pub mod auth;
pub mod database;
pub mod generation;

use crate::domain::error::{AppError, Result};
use crate::domain::query::{QueryResult, RecommendedQuestion, TableInfo};
use crate::domain::session::SessionContext;
use async_trait::async_trait;

pub use auth::{AuthTokens, HttpAuthClient};
pub use database::{ConnectionParams, HttpDatabaseClient};
pub use generation::HttpGenerationClient;

#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthTokens>;
    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens>;
}

#[async_trait]
pub trait DatabaseApi: Send + Sync {
    /// Open a remote database connection; returns the session id that scopes
    /// all later schema and query calls.
    async fn connect(&self, ctx: &SessionContext, params: &ConnectionParams) -> Result<String>;
    async fn list_tables(&self, ctx: &SessionContext) -> Result<Vec<TableInfo>>;
    async fn execute(&self, ctx: &SessionContext, sql: &str) -> Result<QueryResult>;
}

#[async_trait]
pub trait GenerationApi: Send + Sync {
    async fn recommend(&self, ctx: &SessionContext) -> Result<Vec<RecommendedQuestion>>;
    async fn generate_sql(&self, ctx: &SessionContext, question: &str) -> Result<String>;
}

/// Join a path onto the configured base URL, tolerating a trailing slash.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') {
        format!("{}{}", base_url, path.trim_start_matches('/'))
    } else {
        format!("{}/{}", base_url, path.trim_start_matches('/'))
    }
}

/// Turn a non-2xx upstream response into an opaque error carrying status and
/// body text for the logs.
pub(crate) async fn fail_on_status(
    response: reqwest::Response,
    what: &str,
) -> Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(AppError::UpstreamError(format!(
        "{} failed ({}): {}",
        what, status, text
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_join() {
        assert_eq!(
            endpoint("http://127.0.0.1:8000/api", "users/login/"),
            "http://127.0.0.1:8000/api/users/login/"
        );
        assert_eq!(
            endpoint("http://127.0.0.1:8000/api/", "/users/login/"),
            "http://127.0.0.1:8000/api/users/login/"
        );
    }
}
