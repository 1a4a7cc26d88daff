//! 어휘 항목 엔티티
//!
//! 전역 단어장(`vocabularies` 컬렉션)의 한 단어입니다. `word`는 대소문자 구분 없이
//! 유니크하며, 인덱스는 `en` 로케일 strength 2 collation으로 생성됩니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::domain::entities::enums::{Difficulty, ExamTag, LearningStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyEntry {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub word: String,
    pub meaning: String,

    /// 벵골어 뜻
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning_bn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<String>,

    #[serde(default)]
    pub synonyms: Vec<String>,

    #[serde(default)]
    pub antonyms: Vec<String>,

    #[serde(default = "ExamTag::default_tags")]
    pub exam_tags: Vec<ExamTag>,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub status: LearningStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl VocabularyEntry {
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_collections_use_defaults() {
        let now = DateTime::now();
        let doc = mongodb::bson::doc! {
            "word": "laconic",
            "meaning": "using very few words",
            "createdAt": now,
            "updatedAt": now,
        };

        let entry: VocabularyEntry = mongodb::bson::from_document(doc).unwrap();
        assert!(entry.synonyms.is_empty());
        assert_eq!(entry.exam_tags, vec![ExamTag::Ielts]);
        assert_eq!(entry.difficulty, Difficulty::Medium);
        assert_eq!(entry.status, LearningStatus::New);
        assert!(entry.id.is_none());
    }
}
