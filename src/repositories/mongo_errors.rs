//! MongoDB 에러 변환
//!
//! 유니크 인덱스 위반(E11000)은 409, 그 외는 500으로 변환합니다.

use mongodb::error::{Error, ErrorKind, WriteFailure};

use crate::core::errors::AppError;

const DUPLICATE_KEY_CODE: i32 = 11000;

/// 쓰기 에러가 유니크 인덱스 위반인지 확인합니다.
pub fn is_duplicate_key(error: &Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

/// 쓰기 에러를 `AppError`로 변환합니다.
///
/// 중복 키는 `conflict_message`를 담은 `ConflictError`가 됩니다.
pub fn map_write_error(error: Error, conflict_message: &str) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConflictError(conflict_message.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

/// 읽기/기타 에러 변환
pub fn map_db_error(error: Error) -> AppError {
    AppError::DatabaseError(error.to_string())
}
