use super::types::{ExecuteRequest, GenerateRequest, SessionRequest};
use super::{error_response, session_context, AppState};
use crate::application::use_cases::csv_export;
use crate::domain::query::QueryResult;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

#[post("/llm/query/recommend")]
pub async fn recommend(
    data: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<SessionRequest>,
) -> impl Responder {
    let ctx = session_context(&http_req, req.session_id.as_deref());
    match data.workflow.recommend(&ctx).await {
        Ok(questions) => HttpResponse::Ok().json(questions),
        Err(e) => error_response(&e),
    }
}

/// Generate SQL for a natural-language question. The response carries the
/// template plus one `{name, kind, hint}` entry per placeholder so the
/// dashboard can render typed inputs before execution.
#[post("/llm/query/question")]
pub async fn generate(
    data: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<GenerateRequest>,
) -> impl Responder {
    let ctx = session_context(&http_req, req.session_id.as_deref());
    match data.workflow.generate(&ctx, &req.query_question).await {
        Ok(generated) => HttpResponse::Ok().json(generated),
        Err(e) => error_response(&e),
    }
}

/// Resolve placeholders and execute. Responds 422 with the exact missing
/// names while any placeholder is unfilled.
#[post("/database/query/execute")]
pub async fn execute(
    data: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<ExecuteRequest>,
) -> impl Responder {
    let ctx = session_context(&http_req, req.session_id.as_deref());
    match data
        .workflow
        .execute(&ctx, &req.question, &req.query, &req.values)
        .await
    {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => error_response(&e),
    }
}

/// Serialize a result table to CSV for the result screen's download button.
#[post("/queries/export")]
pub async fn export_csv(req: web::Json<QueryResult>) -> impl Responder {
    match csv_export::to_csv(&req) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                "attachment; filename=\"query-results.csv\"",
            ))
            .body(csv),
        Err(e) => error_response(&e),
    }
}
