//! Natural-language query workflow
//!
//! Orchestrates the dashboard's main flow: question goes to the generation
//! collaborator, the returned template is scanned for placeholders, and once
//! every placeholder has a value the resolved SQL goes to the execution
//! collaborator. The completeness gate lives here; the resolver itself stays
//! pure. Every execution attempt lands in history, success or failure.

use crate::application::use_cases::history::HistoryService;
use crate::application::use_cases::placeholder_resolver;
use crate::domain::error::{AppError, Result};
use crate::domain::query::{QueryResult, RecommendedQuestion};
use crate::domain::saved_query::QueryStatus;
use crate::domain::session::SessionContext;
use crate::domain::template::GeneratedQuery;
use crate::infrastructure::api_clients::{DatabaseApi, GenerationApi};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

pub struct QueryWorkflow {
    generation: Arc<dyn GenerationApi>,
    database: Arc<dyn DatabaseApi>,
    history: Arc<HistoryService>,
}

impl QueryWorkflow {
    pub fn new(
        generation: Arc<dyn GenerationApi>,
        database: Arc<dyn DatabaseApi>,
        history: Arc<HistoryService>,
    ) -> Self {
        Self {
            generation,
            database,
            history,
        }
    }

    pub async fn recommend(&self, ctx: &SessionContext) -> Result<Vec<RecommendedQuestion>> {
        self.generation.recommend(ctx).await
    }

    /// Generate SQL for a question and return it with placeholder metadata
    /// so the dashboard can render typed inputs.
    pub async fn generate(&self, ctx: &SessionContext, question: &str) -> Result<GeneratedQuery> {
        if question.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Question must not be empty".to_string(),
            ));
        }

        let sql = self.generation.generate_sql(ctx, question).await?;
        let placeholders = placeholder_resolver::token_specs(&sql);
        info!(
            placeholder_count = placeholders.len(),
            "Generated SQL for question"
        );
        Ok(GeneratedQuery { sql, placeholders })
    }

    /// Resolve placeholders and run the query. Blocked with the exact list
    /// of missing names while any placeholder is unfilled.
    pub async fn execute(
        &self,
        ctx: &SessionContext,
        question: &str,
        sql: &str,
        values: &HashMap<String, String>,
    ) -> Result<QueryResult> {
        if sql.trim().is_empty() {
            return Err(AppError::ValidationError("No SQL to execute".to_string()));
        }

        let tokens = placeholder_resolver::extract_tokens(sql);
        let missing = placeholder_resolver::unfilled_tokens(&tokens, values);
        if !missing.is_empty() {
            return Err(AppError::UnfilledPlaceholders(missing));
        }

        let final_sql = placeholder_resolver::resolve(sql, values);
        let started = Instant::now();
        match self.database.execute(ctx, &final_sql).await {
            Ok(result) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                self.history.record(
                    question,
                    &final_sql,
                    QueryStatus::Completed,
                    result.row_count(),
                    elapsed_ms,
                );
                info!(rows = result.row_count(), elapsed_ms, "Query executed");
                Ok(result)
            }
            Err(e) => {
                let elapsed_ms = started.elapsed().as_millis() as u64;
                self.history
                    .record(question, &final_sql, QueryStatus::Failed, 0, elapsed_ms);
                warn!(error = %e, "Query execution failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::api_clients::ConnectionParams;
    use crate::domain::query::TableInfo;
    use async_trait::async_trait;

    struct FakeGeneration {
        sql: String,
    }

    #[async_trait]
    impl GenerationApi for FakeGeneration {
        async fn recommend(&self, _ctx: &SessionContext) -> Result<Vec<RecommendedQuestion>> {
            Ok(vec![RecommendedQuestion {
                question: "Show me the top 5 customers".to_string(),
            }])
        }

        async fn generate_sql(&self, _ctx: &SessionContext, _question: &str) -> Result<String> {
            Ok(self.sql.clone())
        }
    }

    struct FakeDatabase {
        fail: bool,
    }

    #[async_trait]
    impl DatabaseApi for FakeDatabase {
        async fn connect(
            &self,
            _ctx: &SessionContext,
            _params: &ConnectionParams,
        ) -> Result<String> {
            Ok("session-1".to_string())
        }

        async fn list_tables(&self, _ctx: &SessionContext) -> Result<Vec<TableInfo>> {
            Ok(vec![])
        }

        async fn execute(&self, _ctx: &SessionContext, sql: &str) -> Result<QueryResult> {
            if self.fail {
                return Err(AppError::UpstreamError("boom".to_string()));
            }
            assert!(!sql.contains('{'), "resolved SQL must not contain tokens");
            Ok(QueryResult {
                columns: vec!["id".to_string()],
                rows: vec![],
            })
        }
    }

    fn workflow(sql: &str, fail: bool) -> (QueryWorkflow, Arc<HistoryService>) {
        let history = Arc::new(HistoryService::new());
        let wf = QueryWorkflow::new(
            Arc::new(FakeGeneration {
                sql: sql.to_string(),
            }),
            Arc::new(FakeDatabase { fail }),
            history.clone(),
        );
        (wf, history)
    }

    fn ctx() -> SessionContext {
        SessionContext::new(Some("tok".to_string()), Some("session-1".to_string()))
    }

    #[tokio::test]
    async fn test_generate_attaches_placeholder_metadata() {
        let (wf, _) = workflow("SELECT * FROM orders WHERE placed > {start_date}", false);
        let generated = wf.generate(&ctx(), "orders this month").await.unwrap();
        assert_eq!(generated.placeholders.len(), 1);
        assert_eq!(generated.placeholders[0].name, "start_date");
    }

    #[tokio::test]
    async fn test_generate_rejects_blank_question() {
        let (wf, _) = workflow("SELECT 1", false);
        assert!(wf.generate(&ctx(), "   ").await.is_err());
    }

    #[tokio::test]
    async fn test_execute_blocked_lists_missing_names() {
        let (wf, history) = workflow("", false);
        let err = wf
            .execute(
                &ctx(),
                "q",
                "WHERE id = {id} AND n = {n}",
                &HashMap::from([("id".to_string(), "42".to_string())]),
            )
            .await
            .unwrap_err();
        match err {
            AppError::UnfilledPlaceholders(names) => assert_eq!(names, vec!["n"]),
            other => panic!("expected UnfilledPlaceholders, got {:?}", other),
        }
        // Blocked executions never reach the collaborator or history
        assert!(history.list(None).is_empty());
    }

    #[tokio::test]
    async fn test_execute_resolves_and_records() {
        let (wf, history) = workflow("", false);
        wf.execute(
            &ctx(),
            "q",
            "WHERE id = {id}",
            &HashMap::from([("id".to_string(), "42".to_string())]),
        )
        .await
        .unwrap();

        let entries = history.list(None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].sql, "WHERE id = 42");
        assert_eq!(entries[0].status, QueryStatus::Completed);
    }

    #[tokio::test]
    async fn test_execute_failure_recorded() {
        let (wf, history) = workflow("", true);
        let err = wf
            .execute(&ctx(), "q", "SELECT 1", &HashMap::new())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UpstreamError(_)));

        let entries = history.list(None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status, QueryStatus::Failed);
    }
}
