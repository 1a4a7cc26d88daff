//! 인증 서비스 모듈
//!
//! - [`TokenService`] - HS256 JWT 발급/검증 (상태 없음)
//! - [`AuthService`] - 회원가입, 로그인, OAuth 계정 해석, 프로필
//! - [`GoogleAuthService`] - Google OAuth 2.0 HTTP 통신
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthService, GoogleAuthService};
//!
//! let state = GoogleAuthService::generate_state();
//! let url = GoogleAuthService::instance().authorization_url(&state);
//!
//! let profile = GoogleAuthService::instance().authenticate(&code).await?;
//! let auth = AuthService::instance().oauth_login(profile).await?;
//! ```

pub mod token_service;
pub mod auth_service;
pub mod google_auth_service;

pub use token_service::*;
pub use auth_service::*;
pub use google_auth_service::*;
