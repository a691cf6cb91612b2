use super::{endpoint, fail_on_status, AuthApi};
use crate::domain::error::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Token pair issued by the auth backend. Refresh is absent on the
/// token-refresh endpoint, which only rotates the access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

pub struct HttpAuthClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[async_trait]
impl AuthApi for HttpAuthClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthTokens> {
        let url = endpoint(&self.base_url, "users/login/");
        let response = self
            .client
            .post(&url)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Login request failed: {}", e)))?;

        let response = fail_on_status(response, "Login").await?;
        response
            .json::<AuthTokens>()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Invalid login response: {}", e)))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens> {
        let url = endpoint(&self.base_url, "token/refresh/");
        let response = self
            .client
            .post(&url)
            .json(&json!({ "refresh": refresh_token }))
            .send()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Token refresh failed: {}", e)))?;

        let response = fail_on_status(response, "Token refresh").await?;
        response
            .json::<AuthTokens>()
            .await
            .map_err(|e| AppError::UpstreamError(format!("Invalid refresh response: {}", e)))
    }
}
