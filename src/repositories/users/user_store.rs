use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;
use crate::domain::dto::UpdateProfileRequest;
use crate::domain::entities::User;

/// 사용자 저장소 인터페이스
///
/// 서비스는 이 trait에만 의존하며, 운영에서는 [`UserRepository`](super::UserRepository)가 구현합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError>;

    /// 정규화된(소문자) 이메일로 조회합니다.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장하고 ID가 채워진 사용자를 반환합니다.
    /// 이메일 중복은 `ConflictError`입니다.
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// 기존 계정에 Google ID를 연결하고, 사진이 있으면 아바타로 설정합니다.
    async fn link_google_account(
        &self,
        id: &ObjectId,
        google_id: &str,
        avatar: Option<&str>,
    ) -> Result<Option<User>, AppError>;

    /// `name`, `avatar` 부분 수정. 사용자가 없으면 `None`.
    async fn update_profile(&self, id: &ObjectId, changes: &UpdateProfileRequest) -> Result<Option<User>, AppError>;
}
