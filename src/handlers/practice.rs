//! Practice HTTP Handlers
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::{CreatePracticeRequest, PracticeFilter};
use crate::services::practice::PracticeService;

#[get("")]
pub async fn list_practices(query: web::Query<PracticeFilter>) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let entries = PracticeService::instance().list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(entries))
}

#[post("")]
pub async fn create_practice(payload: web::Json<CreatePracticeRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let entry = PracticeService::instance().create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(entry))
}
