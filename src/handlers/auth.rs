//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 로그아웃, Google OAuth, 현재 사용자 조회/수정 엔드포인트입니다.
//!
//! # Cookies
//!
//! - `token`: JWT. HTTP-only, `SameSite=Lax`, 운영 환경에서는 `Secure`
//! - `logged_in`: 스크립트에서 읽을 수 있는 로그인 표시 (`true`). 토큰을 담지 않습니다.
//! - `oauth_state`: OAuth CSRF 방지 값. 콜백까지 10분간 유지
use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::{get, http::header, patch, post, web, HttpRequest, HttpResponse, HttpResponseBuilder};
use validator::Validate;

use crate::config::{CookieConfig, ServerConfig};
use crate::core::errors::AppError;
use crate::domain::dto::{AuthResponse, LoginRequest, OAuthCallbackQuery, RegisterRequest, UpdateProfileRequest};
use crate::domain::models::auth::AuthenticatedUser;
use crate::services::auth::{AuthService, GoogleAuthService};

fn token_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(CookieConfig::TOKEN_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .secure(CookieConfig::secure())
        .same_site(SameSite::Lax)
        .max_age(Duration::days(CookieConfig::max_age_days()))
        .finish()
}

fn logged_in_cookie() -> Cookie<'static> {
    Cookie::build(CookieConfig::LOGGED_IN_COOKIE, "true")
        .path("/")
        .http_only(false)
        .secure(CookieConfig::secure())
        .same_site(SameSite::Lax)
        .max_age(Duration::days(CookieConfig::max_age_days()))
        .finish()
}

fn oauth_state_cookie(state: &str) -> Cookie<'static> {
    Cookie::build(CookieConfig::OAUTH_STATE_COOKIE, state.to_string())
        .path("/")
        .http_only(true)
        .secure(CookieConfig::secure())
        .same_site(SameSite::Lax)
        .max_age(Duration::minutes(CookieConfig::OAUTH_STATE_TTL_MINUTES))
        .finish()
}

/// 같은 이름/경로의 만료 쿠키
fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build(name, "")
        .path("/")
        .max_age(Duration::ZERO)
        .finish()
}

fn with_auth_cookies(mut builder: HttpResponseBuilder, token: &str) -> HttpResponseBuilder {
    builder.cookie(token_cookie(token)).cookie(logged_in_cookie());
    builder
}

#[post("/register")]
pub async fn register(payload: web::Json<RegisterRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let auth: AuthResponse = AuthService::instance().register(payload.into_inner()).await?;
    let token = auth.token.clone();

    Ok(with_auth_cookies(HttpResponse::Created(), &token).json(auth))
}

#[post("/login")]
pub async fn login(payload: web::Json<LoginRequest>) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let auth = AuthService::instance().login(payload.into_inner()).await?;
    let token = auth.token.clone();

    Ok(with_auth_cookies(HttpResponse::Ok(), &token).json(auth))
}

/// 토큰은 상태가 없으므로 쿠키만 지웁니다.
#[post("/logout")]
pub async fn logout() -> HttpResponse {
    HttpResponse::NoContent()
        .cookie(expired_cookie(CookieConfig::TOKEN_COOKIE))
        .cookie(expired_cookie(CookieConfig::LOGGED_IN_COOKIE))
        .finish()
}

#[get("/google")]
pub async fn google_login() -> HttpResponse {
    let state = GoogleAuthService::generate_state();
    let url = GoogleAuthService::instance().authorization_url(&state);

    HttpResponse::Found()
        .cookie(oauth_state_cookie(&state))
        .insert_header((header::LOCATION, url))
        .finish()
}

#[get("/google/callback")]
pub async fn google_callback(
    req: HttpRequest,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, AppError> {
    if let Some(error) = &query.error {
        log::warn!("Google OAuth returned error: {}", error);
        return Err(AppError::AuthenticationError("Google authentication was cancelled or failed".to_string()));
    }

    let expected_state = req.cookie(CookieConfig::OAUTH_STATE_COOKIE).map(|c| c.value().to_string());
    match (&query.state, expected_state) {
        (Some(received), Some(expected)) if !expected.is_empty() && *received == expected => {}
        _ => {
            log::warn!("Google OAuth callback with missing or mismatching state");
            return Err(AppError::AuthenticationError("Invalid OAuth state".to_string()));
        }
    }

    let code = query.code.as_deref().unwrap_or_default();
    let profile = GoogleAuthService::instance().authenticate(code).await?;
    let auth = AuthService::instance().oauth_login(profile).await?;

    Ok(with_auth_cookies(HttpResponse::Found(), &auth.token)
        .cookie(expired_cookie(CookieConfig::OAUTH_STATE_COOKIE))
        .insert_header((header::LOCATION, ServerConfig::frontend_url()))
        .finish())
}

/// `/auth/me` 스코프 (`AuthMiddleware::required()`)
#[get("")]
pub async fn get_me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    let me = AuthService::instance().current_user(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(me))
}

#[patch("")]
pub async fn update_me(
    user: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let updated = AuthService::instance()
        .update_profile(&user.user_id, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}
