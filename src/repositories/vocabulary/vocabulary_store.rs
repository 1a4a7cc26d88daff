use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;
use crate::domain::dto::{UpdateVocabularyRequest, VocabularyFilter};
use crate::domain::entities::VocabularyEntry;

/// 어휘 저장소 인터페이스
#[async_trait]
pub trait VocabularyStore: Send + Sync {
    /// 저장 후 ID가 채워진 항목을 반환합니다. 단어 중복(대소문자 무시)은 `ConflictError`.
    async fn insert(&self, entry: VocabularyEntry) -> Result<VocabularyEntry, AppError>;

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<VocabularyEntry>, AppError>;

    /// 대소문자를 무시한 정확 일치 조회
    async fn find_by_word(&self, word: &str) -> Result<Option<VocabularyEntry>, AppError>;

    /// 필터 적용 후 최신순으로 최대 `limit`개를 반환합니다.
    async fn list(&self, filter: &VocabularyFilter, limit: i64) -> Result<Vec<VocabularyEntry>, AppError>;

    /// 부분 수정 후 변경된 항목을 반환합니다. 없으면 `None`.
    async fn update(
        &self,
        id: &ObjectId,
        changes: &UpdateVocabularyRequest,
    ) -> Result<Option<VocabularyEntry>, AppError>;

    /// 삭제 여부를 반환합니다.
    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError>;
}
