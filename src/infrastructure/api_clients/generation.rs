use super::{endpoint, fail_on_status, GenerationApi};
use crate::domain::error::{AppError, Result};
use crate::domain::query::RecommendedQuestion;
use crate::domain::session::SessionContext;
use async_trait::async_trait;
use serde_json::json;

pub struct HttpGenerationClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGenerationClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl GenerationApi for HttpGenerationClient {
    async fn recommend(&self, ctx: &SessionContext) -> Result<Vec<RecommendedQuestion>> {
        let url = endpoint(&self.base_url, "llm/query/recommend/");
        let response = self
            .client
            .post(&url)
            .bearer_auth(ctx.bearer()?)
            .json(&json!({ "session_id": ctx.session()? }))
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Recommendation request failed: {}", e)))?;

        let response = fail_on_status(response, "Question recommendation").await?;
        response
            .json::<Vec<RecommendedQuestion>>()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Invalid recommendation response: {}", e)))
    }

    async fn generate_sql(&self, ctx: &SessionContext, question: &str) -> Result<String> {
        let url = endpoint(&self.base_url, "llm/query/question/");
        let response = self
            .client
            .post(&url)
            .bearer_auth(ctx.bearer()?)
            .json(&json!({
                "session_id": ctx.session()?,
                "query_question": question,
            }))
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Generation request failed: {}", e)))?;

        let response = fail_on_status(response, "SQL generation").await?;
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Invalid generation response: {}", e)))?;

        // The generation backend returns the SQL as a bare JSON string.
        body.as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AppError::UpstreamError("Generation response was not a SQL string".to_string())
            })
    }
}
