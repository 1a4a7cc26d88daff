//! 사용자 엔티티
//!
//! `users` 컬렉션에 저장되는 계정 문서입니다. 로컬 가입 사용자는 bcrypt 해시를,
//! Google 로그인 사용자는 `googleId`를 가지며 두 방식이 연결된 계정은 둘 다 가집니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::enums::SubscriptionTier;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    /// 소문자, 공백 제거된 형태로 저장 (유니크 인덱스)
    pub email: String,

    /// bcrypt 해시. 응답 DTO로는 절대 노출되지 않습니다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,

    #[serde(default)]
    pub is_admin: bool,

    #[serde(default)]
    pub subscription_tier: SubscriptionTier,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 이메일/비밀번호 가입 사용자
    pub fn new_local(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password: Some(password_hash),
            google_id: None,
            avatar: None,
            is_admin: false,
            subscription_tier: SubscriptionTier::Free,
            created_at: now,
            updated_at: now,
        }
    }

    /// Google 로그인으로 처음 생성되는 사용자 (비밀번호 없음)
    pub fn new_google(name: String, email: String, google_id: String, avatar: Option<String>) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password: None,
            google_id: Some(google_id),
            avatar,
            is_admin: false,
            subscription_tier: SubscriptionTier::Free,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
