//! 연습 기록 엔티티
//!
//! 시험 영역별 답안 기록입니다. 생성 후 수정/삭제 API는 없습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::enums::{ExamTag, SkillType};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub exam: ExamTag,
    pub skill: SkillType,
    pub prompt: String,
    pub your_answer: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback_or_notes: Option<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}
