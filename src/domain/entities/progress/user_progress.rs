//! 사용자별 학습 진행도 엔티티
//!
//! `(userId, vocabularyId)` 쌍마다 최대 하나의 문서가 존재합니다 (복합 유니크 인덱스).
//! 첫 상태 변경 시 생성되고 이후 변경마다 `reviewCount`가 증가합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::enums::LearningStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub user_id: ObjectId,
    pub vocabulary_id: ObjectId,

    #[serde(default)]
    pub status: LearningStatus,

    #[serde(default)]
    pub review_count: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl UserProgress {
    /// 첫 상태 기록. 리뷰 횟수는 0에서 시작합니다.
    pub fn first_record(user_id: ObjectId, vocabulary_id: ObjectId, status: LearningStatus) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            vocabulary_id,
            status,
            review_count: 0,
            last_reviewed_at: None,
            created_at: now,
            updated_at: now,
        }
    }
}
