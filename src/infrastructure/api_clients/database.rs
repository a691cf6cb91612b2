use super::{endpoint, fail_on_status, DatabaseApi};
use crate::domain::error::{AppError, Result};
use crate::domain::query::{QueryResult, TableInfo};
use crate::domain::session::SessionContext;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use tracing::info;
use validator::Validate;

/// Connection form fields, forwarded verbatim to the database backend.
/// The port travels as a string on the wire, matching the upstream contract.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ConnectionParams {
    #[validate(length(min = 1, message = "Host is required"))]
    pub host: String,
    #[validate(length(min = 1, message = "Database user is required"))]
    pub db_user: String,
    #[validate(length(min = 1, message = "Database name is required"))]
    pub db_name: String,
    pub password: String,
    #[validate(length(min = 1, message = "Port is required"))]
    pub port: String,
}

#[derive(Deserialize)]
struct ConnectResponse {
    session_id: String,
}

/// Upstream execute endpoint names its row list `data`.
#[derive(Deserialize)]
struct ExecuteResponse {
    columns: Vec<String>,
    data: Vec<HashMap<String, serde_json::Value>>,
}

pub struct HttpDatabaseClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDatabaseClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl DatabaseApi for HttpDatabaseClient {
    async fn connect(&self, ctx: &SessionContext, params: &ConnectionParams) -> Result<String> {
        params
            .validate()
            .map_err(|e| AppError::ValidationError(e.to_string()))?;
        if params.port.parse::<u16>().is_err() {
            return Err(AppError::ValidationError(format!(
                "Invalid port: {}",
                params.port
            )));
        }

        let url = endpoint(&self.base_url, "database/connections/");
        let response = self
            .client
            .post(&url)
            .bearer_auth(ctx.bearer()?)
            .json(params)
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Connection request failed: {}", e)))?;

        let response = fail_on_status(response, "Database connection").await?;
        let connected: ConnectResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Invalid connection response: {}", e)))?;

        info!(host = %params.host, db_name = %params.db_name, "Opened remote database session");
        Ok(connected.session_id)
    }

    async fn list_tables(&self, ctx: &SessionContext) -> Result<Vec<TableInfo>> {
        let url = endpoint(&self.base_url, "database/list-tables/");
        let response = self
            .client
            .post(&url)
            .bearer_auth(ctx.bearer()?)
            .json(&json!({ "session_id": ctx.session()? }))
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Table listing failed: {}", e)))?;

        let response = fail_on_status(response, "Table listing").await?;
        response
            .json::<Vec<TableInfo>>()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Invalid table list response: {}", e)))
    }

    async fn execute(&self, ctx: &SessionContext, sql: &str) -> Result<QueryResult> {
        let url = endpoint(&self.base_url, "database/query/execute/");
        let response = self
            .client
            .post(&url)
            .bearer_auth(ctx.bearer()?)
            .json(&json!({ "session_id": ctx.session()?, "query": sql }))
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Query execution failed: {}", e)))?;

        let response = fail_on_status(response, "Query execution").await?;
        let executed: ExecuteResponse = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Invalid execution response: {}", e)))?;

        Ok(QueryResult {
            columns: executed.columns,
            rows: executed.data,
        })
    }
}
