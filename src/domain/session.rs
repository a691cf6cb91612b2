use crate::domain::error::{AppError, Result};

/// Request-scoped identity for collaborator calls.
///
/// The access token comes from the `Authorization` header, the session id
/// from the request body. Both are threaded explicitly into every upstream
/// call; nothing is held in ambient storage.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub access_token: Option<String>,
    pub session_id: Option<String>,
}

impl SessionContext {
    pub fn new(access_token: Option<String>, session_id: Option<String>) -> Self {
        Self {
            access_token,
            session_id,
        }
    }

    /// Bearer token, required for every authenticated upstream call.
    pub fn bearer(&self) -> Result<&str> {
        self.access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::ValidationError("Missing access token".to_string()))
    }

    /// Live database session id, required once a connection has been opened.
    pub fn session(&self) -> Result<&str> {
        self.session_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                AppError::ValidationError("No active database session".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_present() {
        let ctx = SessionContext::new(Some("tok".to_string()), None);
        assert_eq!(ctx.bearer().unwrap(), "tok");
    }

    #[test]
    fn test_bearer_missing() {
        let ctx = SessionContext::default();
        assert!(ctx.bearer().is_err());
    }

    #[test]
    fn test_empty_session_rejected() {
        let ctx = SessionContext::new(Some("tok".to_string()), Some(String::new()));
        assert!(ctx.session().is_err());
    }
}
