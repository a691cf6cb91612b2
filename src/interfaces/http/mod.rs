//! HTTP surface of the gateway
//!
//! JSON endpoints under `/api`, consumed by the browser dashboard. CORS is
//! permissive: the service binds to loopback and fronts a local dashboard.

pub mod auth;
pub mod connection;
pub mod query;
pub mod saved;
pub mod types;

use crate::application::{HistoryService, QueryWorkflow, SavedQueryService};
use crate::domain::error::AppError;
use crate::domain::session::SessionContext;
use crate::infrastructure::api_clients::{AuthApi, DatabaseApi};
use crate::infrastructure::config::Settings;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use std::sync::Arc;
use types::{ErrorBody, UnfilledBody};

pub struct AppState {
    pub auth: Arc<dyn AuthApi>,
    pub database: Arc<dyn DatabaseApi>,
    pub workflow: Arc<QueryWorkflow>,
    pub history: Arc<HistoryService>,
    pub saved_queries: Arc<SavedQueryService>,
}

/// Build the request-scoped collaborator identity from the Authorization
/// header plus the session id carried in the body.
pub fn session_context(req: &HttpRequest, session_id: Option<&str>) -> SessionContext {
    let access_token = req
        .headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.to_string());
    SessionContext::new(access_token, session_id.map(|s| s.to_string()))
}

/// Map application errors onto HTTP responses. Unfilled placeholders keep
/// their structured name list so the dashboard can highlight exact fields.
pub fn error_response(err: &AppError) -> HttpResponse {
    match err {
        AppError::ValidationError(_) => HttpResponse::BadRequest().json(ErrorBody {
            error: err.to_string(),
        }),
        AppError::UnfilledPlaceholders(names) => {
            HttpResponse::UnprocessableEntity().json(UnfilledBody {
                error: err.to_string(),
                missing_placeholders: names.clone(),
            })
        }
        AppError::NotFound(_) => HttpResponse::NotFound().json(ErrorBody {
            error: err.to_string(),
        }),
        AppError::UpstreamError(_) => HttpResponse::BadGateway().json(ErrorBody {
            error: err.to_string(),
        }),
        _ => HttpResponse::InternalServerError().json(ErrorBody {
            error: err.to_string(),
        }),
    }
}

pub fn start_server(settings: &Settings, state: AppState) -> std::io::Result<Server> {
    let state = web::Data::new(state);

    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new().wrap(cors).app_data(state.clone()).service(
            web::scope("/api")
                .service(auth::login)
                .service(auth::refresh)
                .service(connection::connect)
                .service(connection::list_tables)
                .service(query::recommend)
                .service(query::generate)
                .service(query::execute)
                .service(query::export_csv)
                .service(saved::list_history)
                .service(saved::delete_history)
                .service(saved::list_saved)
                .service(saved::save_query)
                .service(saved::get_saved)
                .service(saved::delete_saved),
        )
    })
    .bind((settings.server.host.as_str(), settings.server.port))?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_session_context_from_bearer_header() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer tok-123"))
            .to_http_request();
        let ctx = session_context(&req, Some("sess-9"));
        assert_eq!(ctx.access_token.as_deref(), Some("tok-123"));
        assert_eq!(ctx.session_id.as_deref(), Some("sess-9"));
    }

    #[test]
    fn test_session_context_without_header() {
        let req = TestRequest::default().to_http_request();
        let ctx = session_context(&req, None);
        assert!(ctx.access_token.is_none());
        assert!(ctx.session_id.is_none());
    }

    #[test]
    fn test_unfilled_maps_to_422() {
        let err = AppError::UnfilledPlaceholders(vec!["id".to_string()]);
        assert_eq!(error_response(&err).status(), 422);
    }

    #[test]
    fn test_upstream_maps_to_502() {
        let err = AppError::UpstreamError("down".to_string());
        assert_eq!(error_response(&err).status(), 502);
    }
}
