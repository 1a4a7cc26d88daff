use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{LearningStatus, UserProgress};
use crate::utils::date_utils::{to_utc, to_utc_opt};

/// 진행도 응답 DTO
///
/// 기록이 없는 단어는 `_id`와 타임스탬프 없이 `status: "new"`, `reviewCount: 0`으로 응답합니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    pub vocabulary_id: String,
    pub status: LearningStatus,
    pub review_count: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ProgressResponse {
    /// 아직 기록이 없는 단어의 기본 진행도
    pub fn untracked(vocabulary_id: String) -> Self {
        Self {
            id: None,
            user_id: None,
            vocabulary_id,
            status: LearningStatus::New,
            review_count: 0,
            last_reviewed_at: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl From<UserProgress> for ProgressResponse {
    fn from(progress: UserProgress) -> Self {
        Self {
            id: progress.id.map(|id| id.to_hex()),
            user_id: Some(progress.user_id.to_hex()),
            vocabulary_id: progress.vocabulary_id.to_hex(),
            status: progress.status,
            review_count: progress.review_count,
            last_reviewed_at: to_utc_opt(progress.last_reviewed_at.as_ref()),
            created_at: Some(to_utc(&progress.created_at)),
            updated_at: Some(to_utc(&progress.updated_at)),
        }
    }
}

/// 상태별 집계 (`{ total, new, learning, learned }`)
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ProgressStats {
    pub total: u64,
    pub new: u64,
    pub learning: u64,
    pub learned: u64,
}

impl ProgressStats {
    /// 상태별 개수를 누적합니다. `total`도 함께 증가합니다.
    pub fn add(&mut self, status: LearningStatus, count: u64) {
        match status {
            LearningStatus::New => self.new += count,
            LearningStatus::Learning => self.learning += count,
            LearningStatus::Learned => self.learned += count,
        }
        self.total += count;
    }
}
