//! 경로 파라미터의 ObjectId 파싱

use mongodb::bson::oid::ObjectId;

use crate::core::errors::AppError;

/// 24자리 16진수 문자열을 `ObjectId`로 변환합니다. 형식이 틀리면 400입니다.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw.trim()).map_err(|_| AppError::ValidationError("Invalid id".to_string()))
}
