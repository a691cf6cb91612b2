//! Service configuration
//!
//! Defaults, overridden by `querydeck.toml`, overridden by environment
//! variables prefixed `QUERYDECK_` (nested keys joined with `__`, e.g.
//! `QUERYDECK_UPSTREAM__BASE_URL`).

use crate::domain::error::{AppError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamSettings {
    /// Base URL of the backend API all collaborator calls go through.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("querydeck.toml"))
            .merge(Env::prefixed("QUERYDECK_").split("__"))
            .extract()
            .map_err(|e| AppError::Internal(format!("Failed to load configuration: {}", e)))
    }
}
