pub mod csv_export;
pub mod history;
pub mod placeholder_resolver;
pub mod query_workflow;
pub mod saved_queries;
