//! # Application Error Handling System
//!
//! 백엔드 전역에서 사용하는 통합 에러 타입입니다.
//! 서비스 계층은 `AppError`를 반환하고, Actix-Web이 `ResponseError` 구현을 통해
//! 이를 `{ "message": ... }` 형태의 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 잘못된 ID, 빈 업데이트 등 |
//! | `InvalidPayload` | 400 Bad Request | `validator` 필드 단위 검증 실패 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰/자격 증명 실패 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 유니크 제약 위반 |
//! | `DatabaseError` | 500 | MongoDB 오류 |
//! | `ExternalServiceError` | 500 | Google OAuth 등 외부 API 오류 |
//! | `InternalError` | 500 | 예상치 못한 오류 |
//!
//! 5xx 응답은 내부 정보를 노출하지 않고 항상 `"Internal server error"`를 반환하며,
//! 원인은 서버 로그에만 기록됩니다.

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// 클라이언트에 노출되는 5xx 공통 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// `validator` 필드 단위 검증 실패 (400)
    #[error("Validation failed: {0}")]
    InvalidPayload(ValidationErrors),

    /// 리소스 찾을 수 없음 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 유니크 제약 위반 (409)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 (401)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 외부 서비스 에러 (500)
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    /// 내부 서버 에러 (500)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지
    ///
    /// 4xx 에러는 원본 메시지를 그대로, 5xx 에러는 공통 메시지를 반환합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::ConflictError(msg)
            | AppError::AuthenticationError(msg) => msg.clone(),
            AppError::InvalidPayload(_) => "Invalid request payload".to_string(),
            AppError::DatabaseError(_)
            | AppError::ExternalServiceError(_)
            | AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// 필드별 검증 메시지 목록
    ///
    /// 메시지가 지정되지 않은 규칙은 검증 코드(`length`, `email` 등)를 사용합니다.
    pub fn field_errors(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
        errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), messages)
            })
            .collect()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("{}", self);
        }

        let body = match self {
            AppError::InvalidPayload(errors) => json!({
                "message": self.client_message(),
                "errors": Self::field_errors(errors),
            }),
            _ => json!({ "message": self.client_message() }),
        };

        HttpResponse::build(status).json(body)
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidPayload(errors)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::Validate;

    async fn body_json(error: AppError) -> serde_json::Value {
        let response = error.error_response();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::ValidationError("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::AuthenticationError("no".into()), StatusCode::UNAUTHORIZED),
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (AppError::ConflictError("dup".into()), StatusCode::CONFLICT),
            (AppError::DatabaseError("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::ExternalServiceError("google".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::InternalError("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.error_response().status(), expected, "{:?}", error);
        }
    }

    #[actix_web::test]
    async fn test_client_error_keeps_message() {
        let body = body_json(AppError::NotFound("Vocabulary entry not found".into())).await;
        assert_eq!(body["message"], "Vocabulary entry not found");
    }

    #[actix_web::test]
    async fn test_server_error_hides_detail() {
        let body = body_json(AppError::DatabaseError("connection refused at 10.0.0.3".into())).await;
        assert_eq!(body["message"], INTERNAL_ERROR_MESSAGE);
        assert!(!body.to_string().contains("10.0.0.3"));
    }

    #[derive(Validate)]
    struct SignupForm {
        #[validate(length(min = 1, message = "name is required"))]
        name: String,
        #[validate(email)]
        email: String,
    }

    #[actix_web::test]
    async fn test_invalid_payload_lists_fields() {
        let errors = SignupForm { name: String::new(), email: "nope".into() }
            .validate()
            .unwrap_err();
        let error: AppError = errors.into();
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);

        let body = body_json(error).await;
        assert_eq!(body["errors"]["name"][0], "name is required");
        assert_eq!(body["errors"]["email"][0], "email");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        match result.context("Additional context") {
            Err(AppError::InternalError(msg)) => {
                assert!(msg.contains("Additional context"));
                assert!(msg.contains("original error"));
            }
            other => panic!("Expected InternalError, got {:?}", other),
        }
    }
}
