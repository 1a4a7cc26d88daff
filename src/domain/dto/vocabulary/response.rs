use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::{Difficulty, ExamTag, LearningStatus, VocabularyEntry};
use crate::utils::date_utils::to_utc;

/// 어휘 항목 응답 DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub word: String,
    pub meaning: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning_bn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,

    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
    pub exam_tags: Vec<ExamTag>,
    pub difficulty: Difficulty,
    pub status: LearningStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VocabularyEntry> for VocabularyResponse {
    fn from(entry: VocabularyEntry) -> Self {
        Self {
            id: entry.id.map(|id| id.to_hex()).unwrap_or_default(),
            word: entry.word,
            meaning: entry.meaning,
            meaning_bn: entry.meaning_bn,
            part_of_speech: entry.part_of_speech,
            example_sentence: entry.example_sentence,
            synonyms: entry.synonyms,
            antonyms: entry.antonyms,
            exam_tags: entry.exam_tags,
            difficulty: entry.difficulty,
            status: entry.status,
            notes: entry.notes,
            created_at: to_utc(&entry.created_at),
            updated_at: to_utc(&entry.updated_at),
        }
    }
}

/// 중복 확인 응답 (`{ exists, id?, word? }`)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DuplicateCheckResponse {
    pub exists: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
}

impl DuplicateCheckResponse {
    pub fn not_found() -> Self {
        Self {
            exists: false,
            id: None,
            word: None,
        }
    }

    pub fn found(entry: &VocabularyEntry) -> Self {
        Self {
            exists: true,
            id: entry.id_string(),
            word: Some(entry.word.clone()),
        }
    }
}
