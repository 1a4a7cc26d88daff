use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{ExamTag, PracticeEntry, SkillType};
use crate::utils::date_utils::to_utc;

/// 연습 기록 응답 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PracticeResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub exam: ExamTag,
    pub skill: SkillType,
    pub prompt: String,
    pub your_answer: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_or_notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PracticeEntry> for PracticeResponse {
    fn from(entry: PracticeEntry) -> Self {
        Self {
            id: entry.id.map(|id| id.to_hex()).unwrap_or_default(),
            exam: entry.exam,
            skill: entry.skill,
            prompt: entry.prompt,
            your_answer: entry.your_answer,
            feedback_or_notes: entry.feedback_or_notes,
            created_at: to_utc(&entry.created_at),
            updated_at: to_utc(&entry.updated_at),
        }
    }
}
