//! 학습 진행도 서비스 구현
//!
//! 인증된 사용자의 단어별 학습 상태를 관리합니다.
//!
//! ## 상태 변경 (upsert)
//!
//! - 기록 없음: 요청 상태로 생성, `reviewCount = 0`
//! - 기록 있음: 상태 덮어쓰기, `reviewCount` 1 증가, `lastReviewedAt` 갱신
//!
//! 사용자-단어 쌍의 유일성은 저장소 인덱스가 보장합니다. 동시 첫 기록 경합은
//! 재시도 없이 `ConflictError`로 반환됩니다.

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use once_cell::sync::OnceCell;

use crate::config::ListConfig;
use crate::core::errors::AppError;
use crate::core::registry::{Service, ServiceRegistration};
use crate::domain::dto::{ProgressFilter, ProgressResponse, ProgressStats};
use crate::domain::entities::{LearningStatus, UserProgress};
use crate::repositories::progress::{ProgressRepository, ProgressStore};
use crate::repositories::vocabulary::{VocabularyRepository, VocabularyStore};
use crate::utils::object_id_utils::parse_object_id;

static PROGRESS_SERVICE: OnceCell<Arc<ProgressService>> = OnceCell::new();

pub struct ProgressService {
    progress: Arc<dyn ProgressStore>,
    vocabulary: Arc<dyn VocabularyStore>,
}

impl ProgressService {
    pub fn new(progress: Arc<dyn ProgressStore>, vocabulary: Arc<dyn VocabularyStore>) -> Self {
        Self { progress, vocabulary }
    }

    pub fn instance() -> Arc<Self> {
        PROGRESS_SERVICE
            .get_or_init(|| Arc::new(Self::new(ProgressRepository::instance(), VocabularyRepository::instance())))
            .clone()
    }

    /// 단어 하나의 진행도. 기록이 없으면 기본값(`new`, 0회)입니다.
    pub async fn get(&self, user_id: &ObjectId, vocabulary_id: &str) -> Result<ProgressResponse, AppError> {
        let vocabulary_id = parse_object_id(vocabulary_id)?;

        Ok(match self.progress.find(user_id, &vocabulary_id).await? {
            Some(progress) => ProgressResponse::from(progress),
            None => ProgressResponse::untracked(vocabulary_id.to_hex()),
        })
    }

    /// 사용자의 단어 상태 기록
    ///
    /// 첫 기록은 `reviewCount: 0`으로 만들고, 이후 호출은 상태를 바꾸면서
    /// `reviewCount`를 1 올리고 `lastReviewedAt`을 갱신합니다. 사용자와 단어 쌍마다 기록은 하나입니다.
    ///
    /// # 인자
    ///
    /// * `user_id` - 토큰으로 확인된 사용자
    /// * `vocabulary_id` - 경로의 단어 ID (ObjectId hex)
    /// * `status` - 새 학습 상태
    ///
    /// # 반환값
    ///
    /// * `Ok(ProgressResponse)` - 저장 후 상태
    /// * `Err(AppError::ValidationError)` - ID 형식 오류
    /// * `Err(AppError::NotFound)` - 없는 단어
    /// * `Err(AppError::ConflictError)` - 같은 쌍의 첫 기록이 동시에 저장됨. 재시도하지 않습니다.
    pub async fn upsert(
        &self,
        user_id: &ObjectId,
        vocabulary_id: &str,
        status: LearningStatus,
    ) -> Result<ProgressResponse, AppError> {
        let vocabulary_id = parse_object_id(vocabulary_id)?;

        if self.vocabulary.find_by_id(&vocabulary_id).await?.is_none() {
            return Err(AppError::NotFound("Vocabulary entry not found".to_string()));
        }

        if let Some(updated) = self.progress.record_review(user_id, &vocabulary_id, status).await? {
            log::debug!("Progress reviewed: {} -> {}", vocabulary_id, status.as_str());
            return Ok(ProgressResponse::from(updated));
        }

        let created = self
            .progress
            .insert(UserProgress::first_record(*user_id, vocabulary_id, status))
            .await?;
        log::debug!("Progress started: {} -> {}", vocabulary_id, status.as_str());

        Ok(ProgressResponse::from(created))
    }

    /// 최근 수정순 목록. `limit` 미지정 시 [`ListConfig::DEFAULT_LIMIT`]개
    pub async fn list(&self, user_id: &ObjectId, filter: ProgressFilter) -> Result<Vec<ProgressResponse>, AppError> {
        let limit = ListConfig::resolve_limit(filter.limit);
        let records = self.progress.list(user_id, filter.status, limit).await?;
        Ok(records.into_iter().map(ProgressResponse::from).collect())
    }

    pub async fn delete(&self, user_id: &ObjectId, vocabulary_id: &str) -> Result<(), AppError> {
        let vocabulary_id = parse_object_id(vocabulary_id)?;

        if !self.progress.delete(user_id, &vocabulary_id).await? {
            return Err(AppError::NotFound("Progress record not found".to_string()));
        }
        Ok(())
    }

    pub async fn stats(&self, user_id: &ObjectId) -> Result<ProgressStats, AppError> {
        self.progress.stats(user_id).await
    }
}

#[async_trait]
impl Service for ProgressService {
    fn name(&self) -> &str {
        "progress"
    }
}

fn progress_service_constructor() -> Arc<dyn Service> {
    ProgressService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "progress_service",
        constructor: progress_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::CreateVocabularyRequest;
    use crate::repositories::memory::{MemoryProgressStore, MemoryVocabularyStore};

    struct Fixture {
        progress: Arc<MemoryProgressStore>,
        vocabulary: Arc<MemoryVocabularyStore>,
        service: ProgressService,
    }

    fn fixture() -> Fixture {
        let progress = Arc::new(MemoryProgressStore::default());
        let vocabulary = Arc::new(MemoryVocabularyStore::default());
        let service = ProgressService::new(progress.clone(), vocabulary.clone());
        Fixture { progress, vocabulary, service }
    }

    async fn add_word(store: &MemoryVocabularyStore, word: &str) -> String {
        let request: CreateVocabularyRequest =
            serde_json::from_value(serde_json::json!({ "word": word, "meaning": "m" })).unwrap();
        let entry = store.insert(request.into_entity()).await.unwrap();
        entry.id.unwrap().to_hex()
    }

    #[actix_web::test]
    async fn test_get_untracked_word() {
        let f = fixture();
        let word_id = add_word(&f.vocabulary, "terse").await;

        let progress = f.service.get(&ObjectId::new(), &word_id).await.unwrap();
        assert_eq!(progress.status, LearningStatus::New);
        assert_eq!(progress.review_count, 0);
        assert!(progress.id.is_none());
    }

    #[actix_web::test]
    async fn test_upsert_twice_keeps_one_record() {
        let f = fixture();
        let user = ObjectId::new();
        let word_id = add_word(&f.vocabulary, "terse").await;

        let first = f.service.upsert(&user, &word_id, LearningStatus::Learning).await.unwrap();
        assert_eq!(first.review_count, 0);
        assert!(first.last_reviewed_at.is_none());

        let second = f.service.upsert(&user, &word_id, LearningStatus::Learned).await.unwrap();
        assert_eq!(second.status, LearningStatus::Learned);
        assert_eq!(second.review_count, 1);
        assert!(second.last_reviewed_at.is_some());
        assert_eq!(second.id, first.id);

        assert_eq!(f.progress.count(), 1);
        let fetched = f.service.get(&user, &word_id).await.unwrap();
        assert_eq!(fetched.status, LearningStatus::Learned);
    }

    #[actix_web::test]
    async fn test_upsert_unknown_word_not_found() {
        let f = fixture();
        let result = f
            .service
            .upsert(&ObjectId::new(), &ObjectId::new().to_hex(), LearningStatus::Learning)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(f.progress.count(), 0);
    }

    #[actix_web::test]
    async fn test_list_stats_scoped_to_user() {
        let f = fixture();
        let user = ObjectId::new();
        let other = ObjectId::new();
        let a = add_word(&f.vocabulary, "terse").await;
        let b = add_word(&f.vocabulary, "verbose").await;

        f.service.upsert(&user, &a, LearningStatus::Learning).await.unwrap();
        f.service.upsert(&user, &b, LearningStatus::Learned).await.unwrap();
        f.service.upsert(&other, &a, LearningStatus::New).await.unwrap();
        f.service.upsert(&user, &a, LearningStatus::Learned).await.unwrap();

        let all = f.service.list(&user, ProgressFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].vocabulary_id, a);

        let learning = f
            .service
            .list(&user, ProgressFilter { status: Some(LearningStatus::Learning), ..Default::default() })
            .await
            .unwrap();
        assert!(learning.is_empty());

        let stats = f.service.stats(&user).await.unwrap();
        assert_eq!(stats, ProgressStats { total: 2, new: 0, learning: 0, learned: 2 });
    }

    #[actix_web::test]
    async fn test_list_is_capped() {
        let f = fixture();
        let user = ObjectId::new();
        for i in 0..150 {
            let word_id = add_word(&f.vocabulary, &format!("word-{}", i)).await;
            f.service.upsert(&user, &word_id, LearningStatus::Learning).await.unwrap();
        }

        let default_page = f.service.list(&user, ProgressFilter::default()).await.unwrap();
        assert_eq!(default_page.len() as i64, ListConfig::DEFAULT_LIMIT);

        let small = ProgressFilter { limit: Some(10), ..Default::default() };
        assert_eq!(f.service.list(&user, small).await.unwrap().len(), 10);

        let oversized = ProgressFilter { limit: Some(500), ..Default::default() };
        assert_eq!(f.service.list(&user, oversized).await.unwrap().len() as i64, ListConfig::MAX_LIMIT);
    }

    #[actix_web::test]
    async fn test_delete_then_not_found() {
        let f = fixture();
        let user = ObjectId::new();
        let word_id = add_word(&f.vocabulary, "terse").await;
        f.service.upsert(&user, &word_id, LearningStatus::Learning).await.unwrap();

        f.service.delete(&user, &word_id).await.unwrap();
        assert!(matches!(f.service.delete(&user, &word_id).await, Err(AppError::NotFound(_))));
    }
}
