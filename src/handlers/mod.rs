//! # HTTP Request Handlers Module
//!
//! 요청을 DTO로 역직렬화하고 `validator`로 검증한 뒤 서비스에 위임합니다.
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러 응답 형식은
//! `AppError`의 `ResponseError` 구현이 결정합니다.
//!
//! ```text
//! Client ──► Routes ──► Handlers (이 모듈) ──► Services ──► Repositories ──► MongoDB
//! ```
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`auth`] | `/auth/*` |
//! | [`vocabulary`] | `/vocabulary/*`, `/vocab/*` |
//! | [`practice`] | `/practices` |
//! | [`progress`] | `/progress/*` (인증 필요) |
//! | [`tenses`] | `/tenses` |
//! | [`health`] | `/health` |

pub mod auth;
pub mod vocabulary;
pub mod practice;
pub mod progress;
pub mod tenses;
pub mod health;
