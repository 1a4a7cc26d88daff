//! # Domain Models
//!
//! 저장되지 않는 도메인 모델입니다.
//!
//! - [`auth`] - 요청 주체(`AuthenticatedUser`)와 인증 모드
//! - [`token`] - JWT 클레임
//! - [`oauth`] - Google OAuth 응답과 프로바이더 독립 프로필
//! - [`tenses`] - 시제 참고 항목

pub mod auth;
pub mod token;
pub mod oauth;
pub mod tenses;

pub use auth::*;
pub use token::*;
pub use oauth::*;
pub use tenses::*;
