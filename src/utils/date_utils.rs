//! BSON `DateTime` ↔ `chrono` 변환
//!
//! 엔티티는 BSON 날짜로 저장하고, 응답 DTO는 RFC 3339 문자열로 직렬화되는
//! `chrono::DateTime<Utc>`를 사용합니다.

use chrono::{DateTime, Utc};
use mongodb::bson;

/// BSON 날짜를 UTC `chrono` 날짜로 변환합니다.
///
/// 표현 범위를 벗어난 값은 Unix epoch으로 대체됩니다.
pub fn to_utc(value: &bson::DateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

pub fn to_utc_opt(value: Option<&bson::DateTime>) -> Option<DateTime<Utc>> {
    value.map(to_utc)
}
