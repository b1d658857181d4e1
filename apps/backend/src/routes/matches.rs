//! Read-only match state queries.
//!
//! Like every other reference, a query lazily creates the match, so a fresh
//! identifier answers with a pristine machine instead of a 404.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::services::match_flow;
use crate::state::app_state::AppState;
use crate::state::match_store::DEFAULT_MATCH_ID;

async fn default_state(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(match_flow::current_snapshot(&app_state, DEFAULT_MATCH_ID)))
}

async fn state(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let match_id = path.into_inner();
    Ok(HttpResponse::Ok().json(match_flow::current_snapshot(&app_state, &match_id)))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/state", web::get().to(default_state));
    cfg.route("/{match_id}/state", web::get().to(state));
}
