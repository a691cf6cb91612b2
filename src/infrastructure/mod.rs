pub mod api_clients;
pub mod bootstrap;
pub mod config;
