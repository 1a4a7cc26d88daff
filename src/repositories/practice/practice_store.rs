use async_trait::async_trait;

use crate::core::errors::AppError;
use crate::domain::dto::PracticeFilter;
use crate::domain::entities::PracticeEntry;

/// 연습 기록 저장소 인터페이스 (추가 전용)
#[async_trait]
pub trait PracticeStore: Send + Sync {
    async fn insert(&self, entry: PracticeEntry) -> Result<PracticeEntry, AppError>;

    /// 필터 적용 후 최신순으로 최대 `limit`개를 반환합니다.
    async fn list(&self, filter: &PracticeFilter, limit: i64) -> Result<Vec<PracticeEntry>, AppError>;
}
