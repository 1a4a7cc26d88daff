//! 학습 진행도 요청 DTO

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::LearningStatus;

/// 진행도 상태 변경 요청 (`PUT /progress/{vocabularyId}`)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProgressRequest {
    pub status: LearningStatus,
}

/// 진행도 목록 필터 (`?status=&limit=`)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ProgressFilter {
    #[serde(default)]
    pub status: Option<LearningStatus>,

    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}
