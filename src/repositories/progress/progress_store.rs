use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;
use crate::domain::dto::ProgressStats;
use crate::domain::entities::{LearningStatus, UserProgress};

/// 사용자별 진행도 저장소 인터페이스
///
/// 모든 조회/변경은 `user_id` 범위 안에서만 수행됩니다.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn find(&self, user_id: &ObjectId, vocabulary_id: &ObjectId) -> Result<Option<UserProgress>, AppError>;

    /// 첫 기록을 저장합니다. 같은 쌍이 이미 있으면 `ConflictError`.
    async fn insert(&self, progress: UserProgress) -> Result<UserProgress, AppError>;

    /// 기존 기록의 상태를 덮어쓰고 `reviewCount`를 1 증가, `lastReviewedAt`을 갱신합니다.
    /// 기록이 없으면 `None`.
    async fn record_review(
        &self,
        user_id: &ObjectId,
        vocabulary_id: &ObjectId,
        status: LearningStatus,
    ) -> Result<Option<UserProgress>, AppError>;

    /// 최근 수정순으로 최대 `limit`개를 반환합니다.
    async fn list(
        &self,
        user_id: &ObjectId,
        status: Option<LearningStatus>,
        limit: i64,
    ) -> Result<Vec<UserProgress>, AppError>;

    async fn delete(&self, user_id: &ObjectId, vocabulary_id: &ObjectId) -> Result<bool, AppError>;

    async fn stats(&self, user_id: &ObjectId) -> Result<ProgressStats, AppError>;
}
