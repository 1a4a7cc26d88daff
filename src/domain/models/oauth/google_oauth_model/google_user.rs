//! # Google OAuth 응답 모델
//!
//! 토큰 엔드포인트와 userinfo(v2) 엔드포인트의 응답 형식입니다.

use serde::Deserialize;

/// `POST https://oauth2.googleapis.com/token` 응답
///
/// userinfo 조회에 쓰는 `access_token`만 읽고 나머지 필드는 무시합니다.
#[derive(Debug, Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
}

/// `GET https://www.googleapis.com/oauth2/v2/userinfo` 응답
///
/// 이메일 scope가 거부된 경우 `email`이 없을 수 있습니다.
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub verified_email: Option<bool>,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub picture: Option<String>,
}
