//! Health Check Handler
//!
//! 기본 경로 밖(`/health`)에 등록되며 저장소에 접근하지 않습니다.
use actix_web::{get, HttpResponse};
use chrono::Utc;
use serde_json::json;

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
