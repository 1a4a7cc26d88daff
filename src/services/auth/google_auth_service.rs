//! # Google OAuth 2.0 인증 서비스
//!
//! Authorization Code Flow로 Google 프로필을 가져옵니다.
//!
//! ```text
//! 클라이언트            우리 서버                         Google
//!    │ GET /auth/google     │                               │
//!    ├─────────────────────►│ state 생성 + 쿠키 저장          │
//!    │ 302 (auth URL)       │                               │
//!    │◄─────────────────────┤                               │
//!    │ 사용자 동의 ───────────────────────────────────────────►│
//!    │ GET /auth/google/callback?code&state                 │
//!    ├─────────────────────►│ state 비교                     │
//!    │                      │ code → access_token ─────────►│
//!    │                      │ userinfo 조회 ────────────────►│
//!    │                      │ AuthService::oauth_login       │
//!    │ 302 FRONTEND_URL     │                               │
//!    │◄─────────────────────┤                               │
//! ```
//!
//! 계정 해석과 토큰 발급은 [`AuthService`](super::AuthService)가 담당하며,
//! 이 서비스는 Google과의 HTTP 통신만 다룹니다.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;

use crate::config::GoogleOAuthConfig;
use crate::core::errors::AppError;
use crate::core::registry::{Service, ServiceRegistration};
use crate::domain::models::oauth::{GoogleTokenResponse, GoogleUserInfo, OAuthProfile};

static GOOGLE_AUTH_SERVICE: OnceCell<Arc<GoogleAuthService>> = OnceCell::new();

pub struct GoogleAuthService {
    http: reqwest::Client,
}

/// Google 인증 페이지 URL을 조립합니다.
pub(crate) fn build_authorization_url(
    auth_uri: &str,
    client_id: &str,
    redirect_uri: &str,
    scope: &str,
    state: &str,
) -> String {
    let params = [
        ("client_id", client_id),
        ("redirect_uri", redirect_uri),
        ("response_type", "code"),
        ("scope", scope),
        ("state", state),
    ];

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", auth_uri, query_string)
}

impl GoogleAuthService {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    pub fn instance() -> Arc<Self> {
        GOOGLE_AUTH_SERVICE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    /// CSRF 방지용 state 값. 콜백까지 단기 쿠키에 보관됩니다.
    pub fn generate_state() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    pub fn authorization_url(&self, state: &str) -> String {
        build_authorization_url(
            &GoogleOAuthConfig::auth_uri(),
            &GoogleOAuthConfig::client_id(),
            &GoogleOAuthConfig::callback_url(),
            GoogleOAuthConfig::scope(),
            state,
        )
    }

    /// 인가 코드로 Google 프로필을 조회합니다.
    pub async fn authenticate(&self, code: &str) -> Result<OAuthProfile, AppError> {
        if code.trim().is_empty() {
            return Err(AppError::AuthenticationError("Missing authorization code".to_string()));
        }

        let token = self.exchange_code(code).await?;
        let user_info = self.fetch_user_info(&token.access_token).await?;
        log::debug!("Google profile fetched for provider id {}", user_info.id);

        Ok(OAuthProfile::from(user_info))
    }

    async fn exchange_code(&self, code: &str) -> Result<GoogleTokenResponse, AppError> {
        let client_id = GoogleOAuthConfig::client_id();
        let client_secret = GoogleOAuthConfig::client_secret();
        let redirect_uri = GoogleOAuthConfig::callback_url();

        let params = [
            ("code", code),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("redirect_uri", redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(GoogleOAuthConfig::token_uri())
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google token request failed: {}", e)))?;

        let status = response.status();
        if status.is_client_error() {
            let error_text = response.text().await.unwrap_or_default();
            log::warn!("Google rejected authorization code ({}): {}", status, error_text);
            return Err(AppError::AuthenticationError("Google authentication failed".to_string()));
        }
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google token exchange failed ({}): {}",
                status, error_text
            )));
        }

        response
            .json::<GoogleTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google token response parse failed: {}", e)))
    }

    async fn fetch_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, AppError> {
        let response = self.http
            .get(GoogleOAuthConfig::userinfo_uri())
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google userinfo request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google userinfo request failed ({}): {}",
                status, error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google userinfo parse failed: {}", e)))
    }
}

impl Default for GoogleAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Service for GoogleAuthService {
    fn name(&self) -> &str {
        "google_auth"
    }
}

fn google_auth_service_constructor() -> Arc<dyn Service> {
    GoogleAuthService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "google_auth_service",
        constructor: google_auth_service_constructor,
    }
}
