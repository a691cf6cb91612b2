use super::types::{LoginRequest, RefreshRequest};
use super::{error_response, AppState};
use crate::domain::error::AppError;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::info;
use validator::Validate;

#[post("/auth/login")]
pub async fn login(data: web::Data<AppState>, req: web::Json<LoginRequest>) -> impl Responder {
    if let Err(e) = req.validate() {
        return error_response(&AppError::ValidationError(e.to_string()));
    }

    match data.auth.login(&req.email, &req.password).await {
        Ok(tokens) => {
            info!(email = %req.email, "User logged in");
            HttpResponse::Ok().json(tokens)
        }
        Err(e) => error_response(&e),
    }
}

#[post("/auth/refresh")]
pub async fn refresh(data: web::Data<AppState>, req: web::Json<RefreshRequest>) -> impl Responder {
    match data.auth.refresh(&req.refresh).await {
        Ok(tokens) => HttpResponse::Ok().json(tokens),
        Err(e) => error_response(&e),
    }
}
