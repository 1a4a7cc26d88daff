//! 어휘 요청 DTO
//!
//! 생성/부분 수정 본문, 목록 조회 필터, 중복 확인 쿼리를 정의합니다.

use mongodb::bson::{doc, Bson, DateTime, Document};
use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::{Difficulty, ExamTag, LearningStatus, VocabularyEntry};
use crate::utils::string_utils::{
    deserialize_optional_string, deserialize_optional_string_list, deserialize_trimmed_string,
};

/// 어휘 항목 생성 요청
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVocabularyRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "Word is required"))]
    pub word: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 1000, message = "Meaning is required"))]
    pub meaning: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub meaning_bn: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub part_of_speech: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub example_sentence: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string_list")]
    pub synonyms: Option<Vec<String>>,

    #[serde(default, deserialize_with = "deserialize_optional_string_list")]
    pub antonyms: Option<Vec<String>>,

    #[serde(default)]
    pub exam_tags: Option<Vec<ExamTag>>,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub status: Option<LearningStatus>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub notes: Option<String>,
}

impl CreateVocabularyRequest {
    /// 기본값을 채운 새 엔티티로 변환합니다.
    pub fn into_entity(self) -> VocabularyEntry {
        let now = DateTime::now();

        VocabularyEntry {
            id: None,
            word: self.word,
            meaning: self.meaning,
            meaning_bn: self.meaning_bn,
            part_of_speech: self.part_of_speech,
            example_sentence: self.example_sentence,
            synonyms: self.synonyms.unwrap_or_default(),
            antonyms: self.antonyms.unwrap_or_default(),
            exam_tags: self.exam_tags.unwrap_or_else(ExamTag::default_tags),
            difficulty: self.difficulty.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            notes: self.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 어휘 항목 부분 수정 요청
///
/// 전달된 필드만 변경됩니다. 선택 문자열 필드는 공백만 보내면 무시됩니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVocabularyRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "Word must be at most 100 characters"))]
    pub word: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 1000, message = "Meaning must be at most 1000 characters"))]
    pub meaning: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub meaning_bn: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub part_of_speech: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub example_sentence: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string_list")]
    pub synonyms: Option<Vec<String>>,

    #[serde(default, deserialize_with = "deserialize_optional_string_list")]
    pub antonyms: Option<Vec<String>>,

    #[serde(default)]
    pub exam_tags: Option<Vec<ExamTag>>,

    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub status: Option<LearningStatus>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub notes: Option<String>,
}

impl UpdateVocabularyRequest {
    pub fn is_empty(&self) -> bool {
        self.word.is_none()
            && self.meaning.is_none()
            && self.meaning_bn.is_none()
            && self.part_of_speech.is_none()
            && self.example_sentence.is_none()
            && self.synonyms.is_none()
            && self.antonyms.is_none()
            && self.exam_tags.is_none()
            && self.difficulty.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }

    /// MongoDB `$set` 문서를 생성합니다. `updatedAt`은 항상 포함됩니다.
    pub fn to_set_document(&self) -> Document {
        let mut set = doc! { "updatedAt": DateTime::now() };

        if let Some(word) = &self.word {
            set.insert("word", word.as_str());
        }
        if let Some(meaning) = &self.meaning {
            set.insert("meaning", meaning.as_str());
        }
        if let Some(meaning_bn) = &self.meaning_bn {
            set.insert("meaningBn", meaning_bn.as_str());
        }
        if let Some(part_of_speech) = &self.part_of_speech {
            set.insert("partOfSpeech", part_of_speech.as_str());
        }
        if let Some(example_sentence) = &self.example_sentence {
            set.insert("exampleSentence", example_sentence.as_str());
        }
        if let Some(synonyms) = &self.synonyms {
            set.insert("synonyms", synonyms.clone());
        }
        if let Some(antonyms) = &self.antonyms {
            set.insert("antonyms", antonyms.clone());
        }
        if let Some(exam_tags) = &self.exam_tags {
            let tags: Vec<Bson> = exam_tags.iter().map(|t| Bson::from(t.as_str())).collect();
            set.insert("examTags", tags);
        }
        if let Some(difficulty) = self.difficulty {
            set.insert("difficulty", difficulty.as_str());
        }
        if let Some(status) = self.status {
            set.insert("status", status.as_str());
        }
        if let Some(notes) = &self.notes {
            set.insert("notes", notes.as_str());
        }

        set
    }

    /// 메모리 상의 엔티티에 같은 변경을 적용합니다.
    pub fn apply_to(&self, entry: &mut VocabularyEntry) {
        if let Some(word) = &self.word {
            entry.word = word.clone();
        }
        if let Some(meaning) = &self.meaning {
            entry.meaning = meaning.clone();
        }
        if let Some(meaning_bn) = &self.meaning_bn {
            entry.meaning_bn = Some(meaning_bn.clone());
        }
        if let Some(part_of_speech) = &self.part_of_speech {
            entry.part_of_speech = Some(part_of_speech.clone());
        }
        if let Some(example_sentence) = &self.example_sentence {
            entry.example_sentence = Some(example_sentence.clone());
        }
        if let Some(synonyms) = &self.synonyms {
            entry.synonyms = synonyms.clone();
        }
        if let Some(antonyms) = &self.antonyms {
            entry.antonyms = antonyms.clone();
        }
        if let Some(exam_tags) = &self.exam_tags {
            entry.exam_tags = exam_tags.clone();
        }
        if let Some(difficulty) = self.difficulty {
            entry.difficulty = difficulty;
        }
        if let Some(status) = self.status {
            entry.status = status;
        }
        if let Some(notes) = &self.notes {
            entry.notes = Some(notes.clone());
        }
        entry.updated_at = DateTime::now();
    }
}

/// 어휘 목록 조회 필터 (`?difficulty=&status=&exam=&search=&limit=`)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VocabularyFilter {
    #[serde(default)]
    pub difficulty: Option<Difficulty>,

    #[serde(default)]
    pub status: Option<LearningStatus>,

    /// `examTags`에 포함된 시험
    #[serde(default)]
    pub exam: Option<ExamTag>,

    /// `word`, `meaning` 부분 일치 (대소문자 무시)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,

    #[serde(default)]
    #[validate(range(min = 1, max = 100, message = "Limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

/// 중복 확인 쿼리 (`?word=`)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckDuplicateQuery {
    #[serde(default, deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "Word is required"))]
    pub word: String,
}
