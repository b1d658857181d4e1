//! Catalog queries: the ordered stage list as loaded at startup.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::state::app_state::AppState;

async fn list_stages(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(app_state.catalog.stages()))
}

async fn get_stage(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let stage_id = path.into_inner();
    let stage = app_state.catalog.get(&stage_id).ok_or_else(|| {
        AppError::not_found(ErrorCode::NotFound, format!("No stage with id {stage_id:?}"))
    })?;
    Ok(HttpResponse::Ok().json(stage))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_stages));
    cfg.route("/{stage_id}", web::get().to(get_stage));
}
