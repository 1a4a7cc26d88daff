//! 연습 기록 요청 DTO

use mongodb::bson::DateTime;
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{ExamTag, PracticeEntry, SkillType};
use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

/// 연습 기록 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePracticeRequest {
    pub exam: ExamTag,
    pub skill: SkillType,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "Prompt is required"))]
    pub prompt: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "Answer is required"))]
    pub your_answer: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub feedback_or_notes: Option<String>,
}

impl CreatePracticeRequest {
    pub fn into_entity(self) -> PracticeEntry {
        let now = DateTime::now();

        PracticeEntry {
            id: None,
            exam: self.exam,
            skill: self.skill,
            prompt: self.prompt,
            your_answer: self.your_answer,
            feedback_or_notes: self.feedback_or_notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 연습 기록 목록 필터 (`?exam=&skill=&limit=`)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PracticeFilter {
    #[serde(default)]
    pub exam: Option<ExamTag>,

    #[serde(default)]
    pub skill: Option<SkillType>,

    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_practice_request() {
        let req: CreatePracticeRequest = serde_json::from_str(
            r#"{"exam": "IELTS", "skill": "writing", "prompt": " Task 2 ", "yourAnswer": "essay", "feedbackOrNotes": ""}"#,
        )
        .unwrap();
        assert!(req.validate().is_ok());

        let entry = req.into_entity();
        assert_eq!(entry.prompt, "Task 2");
        assert_eq!(entry.skill, SkillType::Writing);
        assert!(entry.feedback_or_notes.is_none());
    }

    #[test]
    fn test_blank_answer_rejected() {
        let req: CreatePracticeRequest = serde_json::from_str(
            r#"{"exam": "GRE", "skill": "reading", "prompt": "p", "yourAnswer": "   "}"#,
        )
        .unwrap();
        assert!(req.validate().unwrap_err().field_errors().contains_key("your_answer"));
    }
}
