use crate::domain::models::oauth::google_oauth_model::google_user::GoogleUserInfo;

/// 프로바이더 독립적인 OAuth 프로필
///
/// 로그인 흐름은 이 형태만 다루며, 이메일이 하나도 없으면 거부됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthProfile {
    /// 프로바이더 측 사용자 ID (Google `sub`)
    pub provider_id: String,
    pub emails: Vec<String>,
    pub display_name: Option<String>,
    pub photos: Vec<String>,
}

impl OAuthProfile {
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .map(|e| e.trim())
            .find(|e| !e.is_empty())
    }

    pub fn primary_photo(&self) -> Option<&str> {
        self.photos.first().map(String::as_str)
    }
}

/// Google이 미검증으로 표시한 이메일은 버립니다.
impl From<GoogleUserInfo> for OAuthProfile {
    fn from(info: GoogleUserInfo) -> Self {
        let email = info.email.filter(|_| info.verified_email != Some(false));

        Self {
            provider_id: info.id,
            emails: email.into_iter().collect(),
            display_name: info.name,
            photos: info.picture.into_iter().collect(),
        }
    }
}
