//! 미들웨어 모듈
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 헤더 또는 `token` 쿠키의 JWT 검증
//! - 확인된 사용자를 request extension에 저장 (`AuthenticatedUser` extractor로 조회)
//! - 실패 시 핸들러 실행 전에 401 JSON 응답
//!
//! 요청 로깅, CORS, 요청 제한은 `main`에서 actix 기본 미들웨어와
//! `actix-cors`, `actix-governor`로 구성합니다.
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! web::scope("/progress")
//!     .wrap(AuthMiddleware::required())
//!     .route("/stats", web::get().to(progress_stats));
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
