//! 인증 관련 설정 관리 모듈
//!
//! JWT, 인증 쿠키, Google OAuth 2.0 설정을 환경 변수에서 읽어옵니다.
//! 민감한 값(비밀키, 클라이언트 시크릿)은 환경 변수로만 제공해야 하며,
//! 기본값은 개발 환경에서만 안전합니다.

use std::env;

use crate::config::Environment;
use crate::core::errors::AppError;

/// Google OAuth 2.0 설정
///
/// ## 환경 변수
///
/// ```bash
/// export GOOGLE_CLIENT_ID="your-client-id.apps.googleusercontent.com"
/// export GOOGLE_CLIENT_SECRET="your-client-secret"
/// export GOOGLE_CALLBACK_URL="http://localhost:5000/api/v1/auth/google/callback"
/// ```
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> String {
        env::var("GOOGLE_CLIENT_ID").unwrap_or_else(|_| {
            log::warn!("GOOGLE_CLIENT_ID not set, Google login will not work");
            String::new()
        })
    }

    pub fn client_secret() -> String {
        env::var("GOOGLE_CLIENT_SECRET").unwrap_or_else(|_| {
            log::warn!("GOOGLE_CLIENT_SECRET not set, Google login will not work");
            String::new()
        })
    }

    /// Google 콘솔에 등록된 콜백 URL과 정확히 일치해야 합니다.
    pub fn callback_url() -> String {
        env::var("GOOGLE_CALLBACK_URL")
            .unwrap_or_else(|_| "http://localhost:5000/api/v1/auth/google/callback".to_string())
    }

    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI").unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v2/userinfo".to_string())
    }

    /// 요청 scope (`profile email`)
    pub fn scope() -> &'static str {
        "profile email"
    }
}

/// JWT 토큰 설정
///
/// 토큰은 HS256으로 서명되며 서버에 상태를 저장하지 않습니다.
pub struct JwtConfig;

impl JwtConfig {
    /// 개발/테스트 환경에서만 쓰이는 서명 비밀키
    pub const DEV_SECRET: &'static str = "your-secret-key";

    /// JWT 서명 비밀키
    ///
    /// `JWT_SECRET`이 없으면 개발/테스트 환경에서만 [`Self::DEV_SECRET`]을 사용합니다.
    /// 그 외 환경에서는 에러이며, 서버는 시작하지 않습니다.
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    ///
    /// # Errors
    ///
    /// 스테이징/프로덕션에서 `JWT_SECRET`이 비어 있거나 설정되지 않은 경우
    pub fn secret() -> Result<String, AppError> {
        Self::resolve_secret(env::var("JWT_SECRET").ok(), &Environment::current())
    }

    pub fn resolve_secret(raw: Option<String>, environment: &Environment) -> Result<String, AppError> {
        match raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()) {
            Some(secret) => Ok(secret),
            None if matches!(environment, Environment::Development | Environment::Test) => {
                log::warn!("JWT_SECRET not set, using development default");
                Ok(Self::DEV_SECRET.to_string())
            }
            None => Err(AppError::InternalError(format!(
                "JWT_SECRET must be set in {:?} environment",
                environment
            ))),
        }
    }

    /// 토큰 유효 기간(일). 기본값: 7
    pub fn expiration_days() -> i64 {
        env::var("JWT_EXPIRATION_DAYS")
            .ok()
            .and_then(|d| d.parse().ok())
            .filter(|d: &i64| *d > 0)
            .unwrap_or(7)
    }
}

/// 인증 쿠키 설정
///
/// - `token`: HTTP-only, JWT 보관
/// - `logged_in`: 스크립트에서 읽을 수 있는 로그인 여부 플래그 (`true`만 담음)
/// - `oauth_state`: OAuth 리다이렉트 동안의 CSRF state
pub struct CookieConfig;

impl CookieConfig {
    pub const TOKEN_COOKIE: &'static str = "token";
    pub const LOGGED_IN_COOKIE: &'static str = "logged_in";
    pub const OAUTH_STATE_COOKIE: &'static str = "oauth_state";

    /// OAuth state 쿠키 유효 시간(분)
    pub const OAUTH_STATE_TTL_MINUTES: i64 = 10;

    /// 프로덕션에서만 `Secure` 속성을 붙입니다.
    pub fn secure() -> bool {
        Environment::current().is_production()
    }

    /// 인증 쿠키 유효 기간(일). 토큰 만료와 같습니다.
    pub fn max_age_days() -> i64 {
        JwtConfig::expiration_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_endpoints_have_defaults() {
        if env::var("GOOGLE_AUTH_URI").is_err() {
            assert!(GoogleOAuthConfig::auth_uri().starts_with("https://accounts.google.com/"));
        }
        if env::var("GOOGLE_TOKEN_URI").is_err() {
            assert_eq!(GoogleOAuthConfig::token_uri(), "https://oauth2.googleapis.com/token");
        }
        assert_eq!(GoogleOAuthConfig::scope(), "profile email");
    }

    #[test]
    fn test_jwt_expiration_default() {
        if env::var("JWT_EXPIRATION_DAYS").is_err() {
            assert_eq!(JwtConfig::expiration_days(), 7);
        }
    }

    #[test]
    fn test_secret_required_outside_development() {
        for environment in [Environment::Production, Environment::Staging] {
            assert!(JwtConfig::resolve_secret(None, &environment).is_err());
            assert!(JwtConfig::resolve_secret(Some("   ".to_string()), &environment).is_err());
        }

        let secret = JwtConfig::resolve_secret(Some("s3cr3t".to_string()), &Environment::Production).unwrap();
        assert_eq!(secret, "s3cr3t");
    }

    #[test]
    fn test_development_falls_back_to_default_secret() {
        for environment in [Environment::Development, Environment::Test] {
            let secret = JwtConfig::resolve_secret(None, &environment).unwrap();
            assert_eq!(secret, JwtConfig::DEV_SECRET);
        }
    }

    #[test]
    fn test_cookie_names_are_distinct() {
        assert_ne!(CookieConfig::TOKEN_COOKIE, CookieConfig::LOGGED_IN_COOKIE);
        assert_ne!(CookieConfig::TOKEN_COOKIE, CookieConfig::OAUTH_STATE_COOKIE);
    }
}
