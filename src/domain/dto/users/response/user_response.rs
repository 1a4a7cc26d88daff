use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{SubscriptionTier, User};
use crate::utils::date_utils::to_utc;

/// 사용자 응답 DTO
///
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,

    pub is_admin: bool,
    pub subscription_tier: SubscriptionTier,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            google_id,
            avatar,
            is_admin,
            subscription_tier,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            avatar,
            google_id,
            is_admin,
            subscription_tier,
            created_at: to_utc(&created_at),
            updated_at: to_utc(&updated_at),
        }
    }
}

/// 회원가입/로그인 응답 (`{ user, token }`)
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

impl AuthResponse {
    pub fn new(user: User, token: String) -> Self {
        Self {
            user: UserResponse::from(user),
            token,
        }
    }
}
