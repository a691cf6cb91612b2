pub mod use_cases;

pub use use_cases::history::HistoryService;
pub use use_cases::query_workflow::QueryWorkflow;
pub use use_cases::saved_queries::SavedQueryService;
