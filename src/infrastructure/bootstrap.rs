//! Service wiring
//!
//! Builds the application state from settings: one shared reqwest client,
//! the three collaborator clients, and the in-memory stores.

use crate::application::{HistoryService, QueryWorkflow, SavedQueryService};
use crate::domain::error::{AppError, Result};
use crate::infrastructure::api_clients::{
    AuthApi, DatabaseApi, GenerationApi, HttpAuthClient, HttpDatabaseClient, HttpGenerationClient,
};
use crate::infrastructure::config::Settings;
use crate::interfaces::http::AppState;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
}

pub fn build_state(settings: &Settings) -> Result<AppState> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.upstream.timeout_secs))
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

    let base_url = settings.upstream.base_url.clone();
    let auth: Arc<dyn AuthApi> = Arc::new(HttpAuthClient::new(client.clone(), base_url.clone()));
    let database: Arc<dyn DatabaseApi> =
        Arc::new(HttpDatabaseClient::new(client.clone(), base_url.clone()));
    let generation: Arc<dyn GenerationApi> =
        Arc::new(HttpGenerationClient::new(client, base_url.clone()));

    let history = Arc::new(HistoryService::new());
    let saved_queries = Arc::new(SavedQueryService::new());
    let workflow = Arc::new(QueryWorkflow::new(
        generation,
        database.clone(),
        history.clone(),
    ));

    info!(upstream = %base_url, "Application state initialized");
    Ok(AppState {
        auth,
        database,
        workflow,
        history,
        saved_queries,
    })
}
