use super::types::{ConnectResponse, SessionRequest};
use super::{error_response, session_context, AppState};
use crate::infrastructure::api_clients::ConnectionParams;
use actix_web::{post, web, HttpRequest, HttpResponse, Responder};

#[post("/database/connections")]
pub async fn connect(
    data: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<ConnectionParams>,
) -> impl Responder {
    let ctx = session_context(&http_req, None);
    match data.database.connect(&ctx, &req).await {
        Ok(session_id) => HttpResponse::Ok().json(ConnectResponse { session_id }),
        Err(e) => error_response(&e),
    }
}

#[post("/database/list-tables")]
pub async fn list_tables(
    data: web::Data<AppState>,
    http_req: HttpRequest,
    req: web::Json<SessionRequest>,
) -> impl Responder {
    let ctx = session_context(&http_req, req.session_id.as_deref());
    match data.database.list_tables(&ctx).await {
        Ok(tables) => HttpResponse::Ok().json(tables),
        Err(e) => error_response(&e),
    }
}
