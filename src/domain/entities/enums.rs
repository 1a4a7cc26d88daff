//! 엔티티 공통 열거형
//!
//! MongoDB에는 소문자(시험 태그는 대문자) 문자열로 저장되며,
//! JSON 요청/응답과 쿼리 파라미터도 같은 표기를 사용합니다.

use serde::{Deserialize, Serialize};

/// 어휘 난이도
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// 학습 상태 (어휘 항목과 사용자별 진행도에서 공통 사용)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LearningStatus {
    #[default]
    New,
    Learning,
    Learned,
}

impl LearningStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStatus::New => "new",
            LearningStatus::Learning => "learning",
            LearningStatus::Learned => "learned",
        }
    }
}

/// 시험 종류 (어휘 태그, 연습 기록의 시험)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamTag {
    #[serde(rename = "IELTS")]
    Ielts,
    #[serde(rename = "TOEFL")]
    Toefl,
    #[serde(rename = "GRE")]
    Gre,
}

impl ExamTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExamTag::Ielts => "IELTS",
            ExamTag::Toefl => "TOEFL",
            ExamTag::Gre => "GRE",
        }
    }

    /// 새 어휘 항목의 기본 태그
    pub fn default_tags() -> Vec<ExamTag> {
        vec![ExamTag::Ielts]
    }
}

/// 연습 영역
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillType {
    Reading,
    Listening,
    Writing,
    Speaking,
}

impl SkillType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillType::Reading => "reading",
            SkillType::Listening => "listening",
            SkillType::Writing => "writing",
            SkillType::Speaking => "speaking",
        }
    }
}

/// 구독 등급
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    #[default]
    Free,
    Premium,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_match_as_str() {
        for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(serde_json::to_value(d).unwrap(), d.as_str());
        }
        for s in [LearningStatus::New, LearningStatus::Learning, LearningStatus::Learned] {
            assert_eq!(serde_json::to_value(s).unwrap(), s.as_str());
        }
        for e in [ExamTag::Ielts, ExamTag::Toefl, ExamTag::Gre] {
            assert_eq!(serde_json::to_value(e).unwrap(), e.as_str());
        }
        for k in [SkillType::Reading, SkillType::Listening, SkillType::Writing, SkillType::Speaking] {
            assert_eq!(serde_json::to_value(k).unwrap(), k.as_str());
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Difficulty::default(), Difficulty::Medium);
        assert_eq!(LearningStatus::default(), LearningStatus::New);
        assert_eq!(SubscriptionTier::default(), SubscriptionTier::Free);
        assert_eq!(ExamTag::default_tags(), vec![ExamTag::Ielts]);
    }

    #[test]
    fn test_unknown_value_rejected() {
        assert!(serde_json::from_str::<Difficulty>("\"extreme\"").is_err());
        assert!(serde_json::from_str::<ExamTag>("\"ielts\"").is_err());
    }
}
