//! JWT 클레임 구조체
use serde::{Deserialize, Serialize};

/// HS256 JWT의 클레임(Payload)
///
/// - `sub`: 사용자 ID (ObjectId hex)
/// - `iat`: 발급 시간 (Unix timestamp)
/// - `exp`: 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}
