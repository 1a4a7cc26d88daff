//! Tense Reference HTTP Handlers
use actix_web::{get, HttpResponse};

use crate::core::errors::AppError;
use crate::services::tenses::TenseService;

#[get("")]
pub async fn list_tenses() -> Result<HttpResponse, AppError> {
    let service = TenseService::instance();
    Ok(HttpResponse::Ok().json(service.list()?))
}
