//! 인증 관련 요청 DTO
//!
//! 회원가입, 로그인, 프로필 수정, Google OAuth 콜백 쿼리를 정의합니다.
//! 문자열은 역직렬화 시점에 앞뒤 공백이 제거되며, 이후 `validator`로 검증합니다.

use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::{deserialize_optional_string, deserialize_trimmed_string};

/// 이메일/비밀번호 회원가입 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[validate(custom(function = "validate_password_bytes"))]
    pub password: String,
}

/// bcrypt 입력 한계
const MAX_PASSWORD_BYTES: usize = 72;

/// UTF-8 바이트 길이 검사. 72바이트를 넘는 부분은 bcrypt가 잘라냅니다.
fn validate_password_bytes(password: &str) -> Result<(), ValidationError> {
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(ValidationError::new("password_too_long")
            .with_message("Password must be at most 72 bytes".into()));
    }
    Ok(())
}

/// 이메일/비밀번호 로그인 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// 프로필 부분 수정 요청 (`name`, `avatar`만 허용)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 100, message = "Name must be at most 100 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar: Option<String>,
}

impl UpdateProfileRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none()
    }
}

/// Google OAuth 콜백 쿼리 파라미터
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    /// 사용자가 동의를 거부하면 Google이 `access_denied` 등을 전달합니다.
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_trims_and_validates() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"name": "  Ada  ", "email": " ada@example.com ", "password": "correct horse"}"#,
        )
        .unwrap();
        assert_eq!(req.name, "Ada");
        assert_eq!(req.email, "ada@example.com");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_rejects_blank_name_and_short_password() {
        let req: RegisterRequest =
            serde_json::from_str(r#"{"name": "   ", "email": "nope", "password": "short"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_register_password_limit_counts_bytes() {
        let register = |password: String| RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password,
        };

        assert!(register("a".repeat(72)).validate().is_ok());
        assert!(register("a".repeat(73)).validate().is_err());

        // 30자, 90바이트
        let multibyte = "가".repeat(30);
        let errors = register(multibyte).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_update_profile_empty_detection() {
        let req: UpdateProfileRequest = serde_json::from_str(r#"{"name": "  "}"#).unwrap();
        assert!(req.is_empty());

        let req: UpdateProfileRequest =
            serde_json::from_str(r#"{"avatar": "https://cdn.example.com/a.png"}"#).unwrap();
        assert!(!req.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_update_profile_rejects_bad_avatar() {
        let req: UpdateProfileRequest = serde_json::from_str(r#"{"avatar": "not a url"}"#).unwrap();
        assert!(req.validate().is_err());
    }
}
