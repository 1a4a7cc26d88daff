//! Vocabulary HTTP Handlers
//!
//! 공용 단어장 엔드포인트. 인증 없이 접근합니다.
//! `/vocabulary`와 별칭 `/vocab` 양쪽에 같은 핸들러가 등록됩니다.
use actix_web::{delete, get, patch, post, web, HttpResponse};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::{CheckDuplicateQuery, CreateVocabularyRequest, UpdateVocabularyRequest, VocabularyFilter};
use crate::services::vocabulary::VocabularyService;

#[get("")]
pub async fn list_vocabulary(query: web::Query<VocabularyFilter>) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let entries = VocabularyService::instance().list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(entries))
}

#[post("")]
pub async fn create_vocabulary(payload: web::Json<CreateVocabularyRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let entry = VocabularyService::instance().create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(entry))
}

/// `{id}` 라우트보다 먼저 등록되어야 합니다.
#[get("/check-duplicate")]
pub async fn check_duplicate(query: web::Query<CheckDuplicateQuery>) -> Result<HttpResponse, AppError> {
    query.validate()?;

    let result = VocabularyService::instance().check_duplicate(&query.word).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[get("/{id}")]
pub async fn get_vocabulary(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let entry = VocabularyService::instance().get(&path).await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[patch("/{id}")]
pub async fn update_vocabulary(
    path: web::Path<String>,
    payload: web::Json<UpdateVocabularyRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let entry = VocabularyService::instance()
        .update(&path, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(entry))
}

#[delete("/{id}")]
pub async fn delete_vocabulary(path: web::Path<String>) -> Result<HttpResponse, AppError> {
    VocabularyService::instance().delete(&path).await?;
    Ok(HttpResponse::NoContent().finish())
}
