//! # Routes Module
//!
//! 모든 HTTP 라우트를 구성합니다. `/health`는 루트에, 나머지는
//! `API_BASE_PATH`(기본 `/api/v1`) 아래에 등록됩니다.
//!
//! ```text
//! /health
//! /api/v1
//! ├── /auth          register, login, logout, google, google/callback, me (GET/PATCH)
//! ├── /vocabulary    목록/생성, check-duplicate, {id} (GET/PATCH/DELETE)
//! ├── /vocab         /vocabulary 별칭
//! ├── /practices     목록/생성
//! ├── /tenses        목록
//! └── /progress      [인증] 목록, stats, {vocabularyId} (GET/PUT/DELETE)
//! ```
//!
//! 고정 경로(`check-duplicate`, `stats`)는 `{id}` 패턴보다 먼저 등록합니다.
//! JSON 본문, 쿼리, 경로 추출 실패는 모두 `AppError::ValidationError`(400)로 변환되고,
//! 일치하는 라우트가 없으면 404 `{message: "Route not found"}`입니다.

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::config::ServerConfig;
use crate::core::errors::AppError;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

const JSON_LIMIT_BYTES: usize = 1024 * 1024;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::health::health_check);

    cfg.service(
        web::scope(&ServerConfig::api_base_path())
            .app_data(json_config())
            .app_data(query_config())
            .app_data(path_config())
            .configure(configure_auth_routes)
            .configure(configure_vocabulary_routes)
            .configure(configure_practice_routes)
            .configure(configure_tense_routes)
            .configure(configure_progress_routes),
    );

    cfg.default_service(web::to(route_not_found));
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
            .service(handlers::auth::logout)
            .service(handlers::auth::google_login)
            .service(handlers::auth::google_callback)
            .service(
                web::scope("/me")
                    .wrap(AuthMiddleware::required())
                    .service(handlers::auth::get_me)
                    .service(handlers::auth::update_me),
            ),
    );
}

fn vocabulary_scope(path: &str) -> actix_web::Scope {
    web::scope(path)
        .service(handlers::vocabulary::list_vocabulary)
        .service(handlers::vocabulary::create_vocabulary)
        .service(handlers::vocabulary::check_duplicate)
        .service(handlers::vocabulary::get_vocabulary)
        .service(handlers::vocabulary::update_vocabulary)
        .service(handlers::vocabulary::delete_vocabulary)
}

fn configure_vocabulary_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(vocabulary_scope("/vocabulary"));
    cfg.service(vocabulary_scope("/vocab"));
}

fn configure_practice_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/practices")
            .service(handlers::practice::list_practices)
            .service(handlers::practice::create_practice),
    );
}

fn configure_tense_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/tenses").service(handlers::tenses::list_tenses));
}

fn configure_progress_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/progress")
            .wrap(AuthMiddleware::required())
            .service(handlers::progress::list_progress)
            .service(handlers::progress::progress_stats)
            .service(handlers::progress::get_progress)
            .service(handlers::progress::update_progress)
            .service(handlers::progress::delete_progress),
    );
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(|err, _req: &HttpRequest| {
            log::debug!("Rejected JSON payload: {}", err);
            AppError::ValidationError(format!("Invalid JSON payload: {}", err)).into()
        })
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err: error::QueryPayloadError, _req: &HttpRequest| {
        AppError::ValidationError(format!("Invalid query parameters: {}", err)).into()
    })
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: error::PathError, _req: &HttpRequest| {
        AppError::ValidationError(format!("Invalid path parameters: {}", err)).into()
    })
}

async fn route_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Route not found".to_string()))
}
