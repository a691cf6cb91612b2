use super::types::{HistoryListQuery, SaveQueryRequest, SavedListQuery};
use super::{error_response, AppState};
use crate::application::use_cases::saved_queries::SaveQueryInput;
use crate::domain::error::AppError;
use actix_web::{delete, get, post, web, HttpResponse, Responder};
use validator::Validate;

#[get("/history")]
pub async fn list_history(
    data: web::Data<AppState>,
    query: web::Query<HistoryListQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(data.history.list(query.limit))
}

#[delete("/history/{id}")]
pub async fn delete_history(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    match data.history.delete(&path) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

#[get("/queries/saved")]
pub async fn list_saved(
    data: web::Data<AppState>,
    query: web::Query<SavedListQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(data.saved_queries.list(query.search.as_deref()))
}

#[post("/queries/saved")]
pub async fn save_query(
    data: web::Data<AppState>,
    req: web::Json<SaveQueryRequest>,
) -> impl Responder {
    if let Err(e) = req.validate() {
        return error_response(&AppError::ValidationError(e.to_string()));
    }

    let req = req.into_inner();
    let input = SaveQueryInput {
        title: req.title,
        description: req.description,
        question: req.question,
        sql: req.sql,
        execution_time_ms: req.execution_time_ms,
        result_rows: req.result_rows,
    };
    match data.saved_queries.save(input) {
        Ok(saved) => HttpResponse::Created().json(saved),
        Err(e) => error_response(&e),
    }
}

#[get("/queries/saved/{id}")]
pub async fn get_saved(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match data.saved_queries.get(&path) {
        Ok(saved) => HttpResponse::Ok().json(saved),
        Err(e) => error_response(&e),
    }
}

#[delete("/queries/saved/{id}")]
pub async fn delete_saved(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    match data.saved_queries.delete(&path) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}
