//! # 학습 진행도 리포지토리 구현
//!
//! `userprogresses` 컬렉션. `(userId, vocabularyId)` 복합 유니크 인덱스로
//! 사용자-단어 쌍마다 하나의 문서만 존재하도록 보장합니다.
//! 통계는 `$match` + `$group` 집계로 저장소 측에서 계산합니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, oid::ObjectId, Bson, DateTime, Document};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use once_cell::sync::OnceCell;

use crate::core::errors::AppError;
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::dto::ProgressStats;
use crate::domain::entities::{LearningStatus, UserProgress};
use crate::repositories::mongo_errors::{map_db_error, map_write_error};
use crate::repositories::progress::progress_store::ProgressStore;

const COLLECTION_NAME: &str = "userprogresses";

static PROGRESS_REPOSITORY: OnceCell<Arc<ProgressRepository>> = OnceCell::new();

pub struct ProgressRepository {
    db: Arc<Database>,
}

/// `$group` 결과(`{ _id: status, count }`)를 통계로 합산합니다.
///
/// 알 수 없는 상태 값은 건너뜁니다.
pub(crate) fn collect_stats(groups: &[Document]) -> ProgressStats {
    let mut stats = ProgressStats::default();

    for group in groups {
        let status = match group.get("_id").cloned().map(bson::from_bson::<LearningStatus>) {
            Some(Ok(status)) => status,
            _ => {
                log::warn!("Skipping progress group with unexpected status: {:?}", group.get("_id"));
                continue;
            }
        };

        let count = match group.get("count") {
            Some(Bson::Int32(n)) => *n as u64,
            Some(Bson::Int64(n)) => *n as u64,
            Some(Bson::Double(n)) => *n as u64,
            _ => 0,
        };

        stats.add(status, count);
    }

    stats
}

impl ProgressRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    pub fn instance() -> Arc<Self> {
        PROGRESS_REPOSITORY
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<Database>())))
            .clone()
    }

    fn collection(&self) -> Collection<UserProgress> {
        self.db.collection::<UserProgress>(COLLECTION_NAME)
    }

    /// `(userId, vocabularyId)` 유니크 인덱스와 사용자별 최근 수정순 인덱스
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let pair_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "vocabularyId": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_vocabulary_unique".to_string())
                .build())
            .build();

        let user_updated_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "updatedAt": -1 })
            .options(IndexOptions::builder()
                .name("user_updated_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([pair_index, user_updated_index])
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl ProgressStore for ProgressRepository {
    async fn find(&self, user_id: &ObjectId, vocabulary_id: &ObjectId) -> Result<Option<UserProgress>, AppError> {
        self.collection()
            .find_one(doc! { "userId": *user_id, "vocabularyId": *vocabulary_id })
            .await
            .map_err(map_db_error)
    }

    async fn insert(&self, mut progress: UserProgress) -> Result<UserProgress, AppError> {
        let result = self.collection()
            .insert_one(&progress)
            .await
            .map_err(|e| map_write_error(e, "Progress record already exists"))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("insert_one returned a non-ObjectId id".to_string())
        })?;
        progress.id = Some(id);

        Ok(progress)
    }

    async fn record_review(
        &self,
        user_id: &ObjectId,
        vocabulary_id: &ObjectId,
        status: LearningStatus,
    ) -> Result<Option<UserProgress>, AppError> {
        let now = DateTime::now();
        let update = doc! {
            "$set": {
                "status": status.as_str(),
                "lastReviewedAt": now,
                "updatedAt": now,
            },
            "$inc": { "reviewCount": 1 },
        };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "userId": *user_id, "vocabularyId": *vocabulary_id }, update)
            .with_options(options)
            .await
            .map_err(map_db_error)
    }

    async fn list(
        &self,
        user_id: &ObjectId,
        status: Option<LearningStatus>,
        limit: i64,
    ) -> Result<Vec<UserProgress>, AppError> {
        let mut filter = doc! { "userId": *user_id };
        if let Some(status) = status {
            filter.insert("status", status.as_str());
        }

        let cursor = self.collection()
            .find(filter)
            .sort(doc! { "updatedAt": -1, "_id": -1 })
            .limit(limit)
            .await
            .map_err(map_db_error)?;

        cursor.try_collect().await.map_err(map_db_error)
    }

    async fn delete(&self, user_id: &ObjectId, vocabulary_id: &ObjectId) -> Result<bool, AppError> {
        let result = self.collection()
            .delete_one(doc! { "userId": *user_id, "vocabularyId": *vocabulary_id })
            .await
            .map_err(map_db_error)?;

        Ok(result.deleted_count > 0)
    }

    async fn stats(&self, user_id: &ObjectId) -> Result<ProgressStats, AppError> {
        let pipeline = vec![
            doc! { "$match": { "userId": *user_id } },
            doc! { "$group": { "_id": "$status", "count": { "$sum": 1 } } },
        ];

        let groups: Vec<Document> = self.collection()
            .aggregate(pipeline)
            .await
            .map_err(map_db_error)?
            .try_collect()
            .await
            .map_err(map_db_error)?;

        Ok(collect_stats(&groups))
    }
}

#[async_trait]
impl Repository for ProgressRepository {
    fn name(&self) -> &str {
        "progress"
    }

    fn collection_name(&self) -> &str {
        COLLECTION_NAME
    }

    async fn init(&self) -> Result<(), AppError> {
        self.create_indexes().await
    }
}

fn progress_repository_constructor() -> Arc<dyn Repository> {
    ProgressRepository::instance()
}

inventory::submit! {
    RepositoryRegistration {
        name: "progress_repository",
        constructor: progress_repository_constructor,
    }
}
