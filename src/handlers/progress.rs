//! Progress HTTP Handlers
//!
//! 모든 엔드포인트는 `AuthMiddleware::required()` 스코프 안에서 동작하며,
//! 조회와 변경은 토큰의 사용자로 한정됩니다.
use actix_web::{delete, get, put, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::{ProgressFilter, UpdateProgressRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::progress::ProgressService;

#[get("")]
pub async fn list_progress(
    user: AuthenticatedUser,
    query: web::Query<ProgressFilter>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let records = ProgressService::instance()
        .list(&user.object_id()?, query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(records))
}

/// `{vocabularyId}` 라우트보다 먼저 등록되어야 합니다.
#[get("/stats")]
pub async fn progress_stats(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let stats = ProgressService::instance().stats(&user.object_id()?).await?;
    Ok(HttpResponse::Ok().json(stats))
}

#[get("/{vocabulary_id}")]
pub async fn get_progress(user: AuthenticatedUser, path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let progress = ProgressService::instance().get(&user.object_id()?, &path).await?;
    Ok(HttpResponse::Ok().json(progress))
}

#[put("/{vocabulary_id}")]
pub async fn update_progress(
    user: AuthenticatedUser,
    path: web::Path<String>,
    payload: web::Json<UpdateProgressRequest>,
) -> Result<HttpResponse, AppError> {
    let progress = ProgressService::instance()
        .upsert(&user.object_id()?, &path, payload.status)
        .await?;
    Ok(HttpResponse::Ok().json(progress))
}

#[delete("/{vocabulary_id}")]
pub async fn delete_progress(user: AuthenticatedUser, path: web::Path<String>) -> Result<HttpResponse, AppError> {
    ProgressService::instance().delete(&user.object_id()?, &path).await?;
    Ok(HttpResponse::NoContent().finish())
}
