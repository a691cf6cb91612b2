pub mod error;
pub mod query;
pub mod saved_query;
pub mod session;
pub mod template;
