//! # 문자열 유틸리티
//!
//! 요청 DTO의 문자열 정리(trim)와 검색어 이스케이프를 담당합니다.

use serde::{Deserialize, Deserializer};

/// 앞뒤 공백을 제거하고, 비어 있으면 `None`을 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 목록의 각 항목을 정리하고 빈 항목은 제거합니다.
pub fn clean_string_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .filter_map(|s| clean_optional_string(Some(s)))
        .collect()
}

/// 이메일을 저장/조회용 정규 형태(공백 제거 + 소문자)로 변환합니다.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// 정규식 메타문자를 이스케이프합니다.
///
/// 사용자 검색어를 MongoDB `$regex`에 그대로 넣을 때 사용합니다.
pub fn escape_regex(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(
            c,
            '\\' | '.' | '+' | '*' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$' | '-' | '/' | '#'
        ) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 필수 문자열 필드용: 앞뒤 공백만 제거합니다.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

/// 선택 문자열 필드용: 공백 제거 후 비어 있으면 `None`.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 선택 문자열 목록 필드용: 항목별 정리, `null`은 `None`.
pub fn deserialize_optional_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(opt.map(clean_string_list))
}
