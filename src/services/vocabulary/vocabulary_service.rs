//! 어휘 서비스 구현
//!
//! 공용 단어장의 생성, 목록, 단건 조회, 부분 수정, 삭제, 중복 확인을 담당합니다.
//! 단어는 대소문자를 무시하고 유일해야 합니다. 사전 조회로 먼저 거르고,
//! 동시 생성 경합은 저장소의 유니크 인덱스가 `ConflictError`로 돌려줍니다.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;

use crate::config::ListConfig;
use crate::core::errors::AppError;
use crate::core::registry::{Service, ServiceRegistration};
use crate::domain::dto::{
    CreateVocabularyRequest, DuplicateCheckResponse, UpdateVocabularyRequest, VocabularyFilter, VocabularyResponse,
};
use crate::repositories::vocabulary::{VocabularyRepository, VocabularyStore};
use crate::utils::object_id_utils::parse_object_id;

const NOT_FOUND_MESSAGE: &str = "Vocabulary entry not found";
const DUPLICATE_WORD_MESSAGE: &str = "Vocabulary word already exists";

static VOCABULARY_SERVICE: OnceCell<Arc<VocabularyService>> = OnceCell::new();

pub struct VocabularyService {
    vocabulary: Arc<dyn VocabularyStore>,
}

impl VocabularyService {
    pub fn new(vocabulary: Arc<dyn VocabularyStore>) -> Self {
        Self { vocabulary }
    }

    pub fn instance() -> Arc<Self> {
        VOCABULARY_SERVICE
            .get_or_init(|| Arc::new(Self::new(VocabularyRepository::instance())))
            .clone()
    }

    /// 새 단어 등록
    ///
    /// 대소문자를 무시한 정확 일치로 중복을 먼저 확인합니다. 확인과 저장 사이에
    /// 같은 단어가 들어오면 `word` 유니크 인덱스(strength 2 collation)가 막습니다.
    ///
    /// # 인자
    ///
    /// * `request` - 검증된 생성 요청. `examTags`, `synonyms` 등 선택 필드는 비어 있을 수 있습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(VocabularyResponse)` - 저장된 항목 (기본 `difficulty: medium`, `status: new`)
    /// * `Err(AppError::ConflictError)` - `"Vocabulary word already exists"`
    ///
    /// # 사용 예제
    ///
    /// ```rust,ignore
    /// let request: CreateVocabularyRequest = serde_json::from_value(json!({
    ///     "word": "ubiquitous",
    ///     "meaning": "present everywhere",
    ///     "examTags": ["GRE"],
    /// }))?;
    /// let entry = VocabularyService::instance().create(request).await?;
    /// ```
    pub async fn create(&self, request: CreateVocabularyRequest) -> Result<VocabularyResponse, AppError> {
        if self.vocabulary.find_by_word(&request.word).await?.is_some() {
            return Err(AppError::ConflictError(DUPLICATE_WORD_MESSAGE.to_string()));
        }

        let entry = self.vocabulary.insert(request.into_entity()).await?;
        log::info!("Vocabulary entry created: {}", entry.word);

        Ok(VocabularyResponse::from(entry))
    }

    /// 최신순 목록. `limit`이 없으면 기본값, 최대값을 넘지 않습니다.
    pub async fn list(&self, filter: VocabularyFilter) -> Result<Vec<VocabularyResponse>, AppError> {
        let limit = ListConfig::resolve_limit(filter.limit);
        let entries = self.vocabulary.list(&filter, limit).await?;

        Ok(entries.into_iter().map(VocabularyResponse::from).collect())
    }

    pub async fn get(&self, id: &str) -> Result<VocabularyResponse, AppError> {
        let id = parse_object_id(id)?;

        self.vocabulary
            .find_by_id(&id)
            .await?
            .map(VocabularyResponse::from)
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    /// 부분 수정. 다른 항목의 단어로 바꾸려 하면 409입니다.
    pub async fn update(&self, id: &str, request: UpdateVocabularyRequest) -> Result<VocabularyResponse, AppError> {
        let id = parse_object_id(id)?;
        if request.is_empty() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }

        if let Some(word) = &request.word {
            if let Some(existing) = self.vocabulary.find_by_word(word).await? {
                if existing.id != Some(id) {
                    return Err(AppError::ConflictError(DUPLICATE_WORD_MESSAGE.to_string()));
                }
            }
        }

        self.vocabulary
            .update(&id, &request)
            .await?
            .map(VocabularyResponse::from)
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.to_string()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        let id = parse_object_id(id)?;

        if !self.vocabulary.delete(&id).await? {
            return Err(AppError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }

        log::info!("Vocabulary entry deleted: {}", id);
        Ok(())
    }

    /// 대소문자를 무시한 정확 일치로 기존 단어를 찾습니다.
    pub async fn check_duplicate(&self, word: &str) -> Result<DuplicateCheckResponse, AppError> {
        Ok(match self.vocabulary.find_by_word(word).await? {
            Some(entry) => DuplicateCheckResponse::found(&entry),
            None => DuplicateCheckResponse::not_found(),
        })
    }
}

#[async_trait]
impl Service for VocabularyService {
    fn name(&self) -> &str {
        "vocabulary"
    }
}

fn vocabulary_service_constructor() -> Arc<dyn Service> {
    VocabularyService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "vocabulary_service",
        constructor: vocabulary_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Difficulty;
    use crate::repositories::memory::MemoryVocabularyStore;
    use mongodb::bson::oid::ObjectId;

    fn service() -> VocabularyService {
        VocabularyService::new(Arc::new(MemoryVocabularyStore::default()))
    }

    fn create_request(word: &str, meaning: &str) -> CreateVocabularyRequest {
        serde_json::from_value(serde_json::json!({ "word": word, "meaning": meaning })).unwrap()
    }

    #[actix_web::test]
    async fn test_duplicate_word_any_case_conflicts() {
        let service = service();
        let created = service.create(create_request("ubiquitous", "found everywhere")).await.unwrap();

        let again = service.create(create_request("UBIQUITOUS", "everywhere")).await;
        assert!(matches!(again, Err(AppError::ConflictError(_))));

        let check = service.check_duplicate("Ubiquitous").await.unwrap();
        assert!(check.exists);
        assert_eq!(check.id.as_deref(), Some(created.id.as_str()));
        assert_eq!(check.word.as_deref(), Some("ubiquitous"));

        assert_eq!(service.check_duplicate("ephemeral").await.unwrap(), DuplicateCheckResponse::not_found());
    }

    #[actix_web::test]
    async fn test_list_respects_limit_newest_first() {
        let service = service();
        for i in 0..8 {
            service.create(create_request(&format!("word{}", i), "meaning")).await.unwrap();
        }

        let listed = service
            .list(VocabularyFilter { limit: Some(5), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(listed.len(), 5);
        assert_eq!(listed[0].word, "word7");
        assert_eq!(listed[4].word, "word3");
    }

    #[actix_web::test]
    async fn test_list_search_and_difficulty_filter() {
        let service = service();
        service.create(create_request("terse", "brief and to the point")).await.unwrap();
        service.create(create_request("verbose", "using more words than needed")).await.unwrap();

        let by_meaning = service
            .list(VocabularyFilter { search: Some("BRIEF".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(by_meaning.len(), 1);
        assert_eq!(by_meaning[0].word, "terse");

        let hard = service
            .list(VocabularyFilter { difficulty: Some(Difficulty::Hard), ..Default::default() })
            .await
            .unwrap();
        assert!(hard.is_empty());
    }

    #[actix_web::test]
    async fn test_update_and_rename_conflict() {
        let service = service();
        let terse = service.create(create_request("terse", "brief")).await.unwrap();
        service.create(create_request("verbose", "wordy")).await.unwrap();

        let updated = service
            .update(
                &terse.id,
                UpdateVocabularyRequest { meaning: Some("concise".into()), ..Default::default() },
            )
            .await
            .unwrap();
        assert_eq!(updated.meaning, "concise");
        assert_eq!(updated.word, "terse");

        let clash = service
            .update(&terse.id, UpdateVocabularyRequest { word: Some("Verbose".into()), ..Default::default() })
            .await;
        assert!(matches!(clash, Err(AppError::ConflictError(_))));

        let same_word = service
            .update(&terse.id, UpdateVocabularyRequest { word: Some("Terse".into()), ..Default::default() })
            .await
            .unwrap();
        assert_eq!(same_word.word, "Terse");
    }

    #[actix_web::test]
    async fn test_update_unknown_and_empty() {
        let service = service();
        let missing = service
            .update(
                &ObjectId::new().to_hex(),
                UpdateVocabularyRequest { meaning: Some("x".into()), ..Default::default() },
            )
            .await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let empty = service.update(&ObjectId::new().to_hex(), UpdateVocabularyRequest::default()).await;
        assert!(matches!(empty, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_delete_twice_not_found() {
        let service = service();
        let entry = service.create(create_request("terse", "brief")).await.unwrap();

        service.delete(&entry.id).await.unwrap();
        assert!(matches!(service.delete(&entry.id).await, Err(AppError::NotFound(_))));
        assert!(matches!(service.get(&entry.id).await, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_malformed_id_is_bad_request() {
        let result = service().get("12345").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
