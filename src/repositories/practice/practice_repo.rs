//! # 연습 기록 리포지토리 구현
//!
//! `practiceentries` 컬렉션. `createdAt` 내림차순 인덱스와
//! 시험/영역 필터용 복합 인덱스를 사용합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use once_cell::sync::OnceCell;

use crate::core::errors::AppError;
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::dto::PracticeFilter;
use crate::domain::entities::PracticeEntry;
use crate::repositories::mongo_errors::map_db_error;
use crate::repositories::practice::practice_store::PracticeStore;

const COLLECTION_NAME: &str = "practiceentries";

static PRACTICE_REPOSITORY: OnceCell<Arc<PracticeRepository>> = OnceCell::new();

pub struct PracticeRepository {
    db: Arc<Database>,
}

pub(crate) fn build_list_filter(filter: &PracticeFilter) -> Document {
    let mut query = Document::new();
    if let Some(exam) = filter.exam {
        query.insert("exam", exam.as_str());
    }
    if let Some(skill) = filter.skill {
        query.insert("skill", skill.as_str());
    }
    query
}

impl PracticeRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn instance() -> Arc<Self> {
        PRACTICE_REPOSITORY
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<Database>())))
            .clone()
    }

    fn collection(&self) -> Collection<PracticeEntry> {
        self.db.collection::<PracticeEntry>(COLLECTION_NAME)
    }

    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        let exam_skill_index = IndexModel::builder()
            .keys(doc! { "exam": 1, "skill": 1, "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("exam_skill_created_at".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([created_at_index, exam_skill_index])
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl PracticeStore for PracticeRepository {
    async fn insert(&self, mut entry: PracticeEntry) -> Result<PracticeEntry, AppError> {
        let result = self.collection()
            .insert_one(&entry)
            .await
            .map_err(map_db_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("insert_one returned a non-ObjectId id".to_string())
        })?;
        entry.id = Some(id);

        Ok(entry)
    }

    async fn list(&self, filter: &PracticeFilter, limit: i64) -> Result<Vec<PracticeEntry>, AppError> {
        let cursor = self.collection()
            .find(build_list_filter(filter))
            .sort(doc! { "createdAt": -1, "_id": -1 })
            .limit(limit)
            .await
            .map_err(map_db_error)?;

        cursor.try_collect().await.map_err(map_db_error)
    }
}

#[async_trait]
impl Repository for PracticeRepository {
    fn name(&self) -> &str {
        "practice"
    }

    fn collection_name(&self) -> &str {
        COLLECTION_NAME
    }

    async fn init(&self) -> Result<(), AppError> {
        self.create_indexes().await
    }
}

fn practice_repository_constructor() -> Arc<dyn Repository> {
    PracticeRepository::instance()
}

inventory::submit! {
    RepositoryRegistration {
        name: "practice_repository",
        constructor: practice_repository_constructor,
    }
}
