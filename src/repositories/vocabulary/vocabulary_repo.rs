//! # 어휘 리포지토리 구현
//!
//! `vocabularies` 컬렉션에 대한 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 인덱스
//!
//! - `word_unique_ci`: `word` 유니크, `en` 로케일 strength 2 collation (대소문자 무시)
//! - `created_at_desc`: 목록 정렬용

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document, Regex};
use mongodb::options::{Collation, CollationStrength, FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use once_cell::sync::OnceCell;

use crate::core::errors::AppError;
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::dto::{UpdateVocabularyRequest, VocabularyFilter};
use crate::domain::entities::VocabularyEntry;
use crate::repositories::mongo_errors::{map_db_error, map_write_error};
use crate::repositories::vocabulary::vocabulary_store::VocabularyStore;
use crate::utils::string_utils::escape_regex;

const COLLECTION_NAME: &str = "vocabularies";
const DUPLICATE_WORD_MESSAGE: &str = "Vocabulary word already exists";

static VOCABULARY_REPOSITORY: OnceCell<Arc<VocabularyRepository>> = OnceCell::new();

pub struct VocabularyRepository {
    db: Arc<Database>,
}

/// 목록 조회용 MongoDB 필터를 생성합니다.
pub(crate) fn build_list_filter(filter: &VocabularyFilter) -> Document {
    let mut query = Document::new();

    if let Some(difficulty) = filter.difficulty {
        query.insert("difficulty", difficulty.as_str());
    }
    if let Some(status) = filter.status {
        query.insert("status", status.as_str());
    }
    if let Some(exam) = filter.exam {
        query.insert("examTags", exam.as_str());
    }
    if let Some(search) = &filter.search {
        let pattern = Regex {
            pattern: escape_regex(search),
            options: "i".to_string(),
        };
        query.insert(
            "$or",
            vec![
                doc! { "word": pattern.clone() },
                doc! { "meaning": pattern },
            ],
        );
    }

    query
}

/// 대소문자를 무시한 단어 정확 일치 필터
pub(crate) fn word_lookup_filter(word: &str) -> Document {
    doc! {
        "word": Regex {
            pattern: format!("^{}$", escape_regex(word.trim())),
            options: "i".to_string(),
        }
    }
}

impl VocabularyRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn instance() -> Arc<Self> {
        VOCABULARY_REPOSITORY
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<Database>())))
            .clone()
    }

    fn collection(&self) -> Collection<VocabularyEntry> {
        self.db.collection::<VocabularyEntry>(COLLECTION_NAME)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let collation = Collation::builder()
            .locale("en".to_string())
            .strength(CollationStrength::Secondary)
            .build();

        let word_index = IndexModel::builder()
            .keys(doc! { "word": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .collation(collation)
                .name("word_unique_ci".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([word_index, created_at_index])
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl VocabularyStore for VocabularyRepository {
    async fn insert(&self, mut entry: VocabularyEntry) -> Result<VocabularyEntry, AppError> {
        let result = self.collection()
            .insert_one(&entry)
            .await
            .map_err(|e| map_write_error(e, DUPLICATE_WORD_MESSAGE))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("insert_one returned a non-ObjectId id".to_string())
        })?;
        entry.id = Some(id);

        Ok(entry)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<VocabularyEntry>, AppError> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(map_db_error)
    }

    async fn find_by_word(&self, word: &str) -> Result<Option<VocabularyEntry>, AppError> {
        self.collection()
            .find_one(word_lookup_filter(word))
            .await
            .map_err(map_db_error)
    }

    async fn list(&self, filter: &VocabularyFilter, limit: i64) -> Result<Vec<VocabularyEntry>, AppError> {
        let cursor = self.collection()
            .find(build_list_filter(filter))
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .limit(limit)
            .await
            .map_err(map_db_error)?;

        cursor.try_collect().await.map_err(map_db_error)
    }

    async fn update(
        &self,
        id: &ObjectId,
        changes: &UpdateVocabularyRequest,
    ) -> Result<Option<VocabularyEntry>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": changes.to_set_document() })
            .with_options(options)
            .await
            .map_err(|e| map_write_error(e, DUPLICATE_WORD_MESSAGE))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection()
            .delete_one(doc! { "_id": *id })
            .await
            .map_err(map_db_error)?;

        Ok(result.deleted_count > 0)
    }
}

#[async_trait]
impl Repository for VocabularyRepository {
    fn name(&self) -> &str {
        "vocabulary"
    }

    fn collection_name(&self) -> &str {
        COLLECTION_NAME
    }

    async fn init(&self) -> Result<(), AppError> {
        self.create_indexes().await
    }
}

fn vocabulary_repository_constructor() -> Arc<dyn Repository> {
    VocabularyRepository::instance()
}

inventory::submit! {
    RepositoryRegistration {
        name: "vocabulary_repository",
        constructor: vocabulary_repository_constructor,
    }
}
