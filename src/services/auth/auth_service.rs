//! 인증 흐름 서비스 구현
//!
//! 회원가입, 로그인, Google OAuth 로그인(계정 연결 포함), 현재 사용자 조회,
//! 프로필 수정을 담당합니다.
//!
//! ## OAuth 계정 해석 순서
//!
//! 1. Google ID로 기존 사용자 조회
//! 2. 없으면 이메일로 조회하여 Google ID 연결 (사진이 있으면 아바타로 사용)
//! 3. 그래도 없으면 비밀번호 없는 새 사용자 생성
//!
//! 어느 경우든 토큰을 발급합니다.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use once_cell::sync::OnceCell;

use crate::config::PasswordConfig;
use crate::core::errors::{AppError, ErrorContext};
use crate::core::registry::{Service, ServiceRegistration};
use crate::domain::dto::{AuthResponse, LoginRequest, RegisterRequest, UpdateProfileRequest, UserResponse};
use crate::domain::entities::{SubscriptionTier, User};
use crate::domain::models::oauth::OAuthProfile;
use crate::repositories::users::{UserRepository, UserStore};
use crate::services::auth::token_service::TokenService;
use crate::utils::string_utils::normalize_email;

const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";
const USER_NOT_FOUND_MESSAGE: &str = "User not found";

static AUTH_SERVICE: OnceCell<Arc<AuthService>> = OnceCell::new();

pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: Arc<TokenService>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: Arc<TokenService>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            tokens,
            bcrypt_cost,
        }
    }

    pub fn instance() -> Arc<Self> {
        AUTH_SERVICE
            .get_or_init(|| {
                Arc::new(Self::new(
                    UserRepository::instance(),
                    TokenService::instance(),
                    PasswordConfig::bcrypt_cost(),
                ))
            })
            .clone()
    }

    /// 이메일/비밀번호 회원가입
    ///
    /// 이메일을 정규화(trim, 소문자)한 뒤 중복을 확인하고, bcrypt로 해싱한 비밀번호와 함께
    /// 로컬 계정을 저장합니다. 저장 직후 토큰을 발급합니다.
    ///
    /// # 인자
    ///
    /// * `request` - `validator` 검증을 통과한 회원가입 요청
    ///
    /// # 반환값
    ///
    /// * `Ok(AuthResponse)` - 생성된 사용자와 토큰
    /// * `Err(AppError::ConflictError)` - 같은 이메일의 계정이 이미 있음.
    ///   사전 조회와 저장 사이의 경합은 유니크 인덱스가 같은 에러로 막습니다.
    /// * `Err(AppError::InternalError)` - 해싱 또는 토큰 서명 실패
    ///
    /// # 사용 예제
    ///
    /// ```rust,ignore
    /// let auth = AuthService::instance()
    ///     .register(RegisterRequest {
    ///         name: "Ada".to_string(),
    ///         email: "Ada@Example.com".to_string(),
    ///         password: "correct horse".to_string(),
    ///     })
    ///     .await?;
    /// assert_eq!(auth.user.email, "ada@example.com");
    /// ```
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        let email = normalize_email(&request.email);

        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::ConflictError("User with this email already exists".to_string()));
        }

        let password_hash = self.hash_password(&request.password)?;

        let user = self
            .users
            .insert(User::new_local(request.name, email, password_hash))
            .await?;

        log::info!("User registered: {}", user.email);
        self.issue_for(user)
    }

    /// 이메일/비밀번호 로그인
    ///
    /// # 반환값
    ///
    /// * `Ok(AuthResponse)` - 확인된 사용자와 새 토큰
    /// * `Err(AppError::AuthenticationError)` - 사용자 없음, 비밀번호 없는(OAuth 전용) 계정,
    ///   비밀번호 불일치. 세 경우 모두 같은 메시지입니다.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let email = normalize_email(&request.email);

        let user = match self.users.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                log::warn!("Login rejected for unknown email");
                return Err(AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string()));
            }
        };

        let Some(password_hash) = user.password.as_deref() else {
            log::warn!("Login rejected for account without password: {}", user.email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string()));
        };

        let verify_start = Instant::now();
        let is_valid = bcrypt::verify(&request.password, password_hash).context("Password verification failed")?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("Login rejected for {}: wrong password", user.email);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS_MESSAGE.to_string()));
        }

        log::info!("User logged in: {}", user.email);
        self.issue_for(user)
    }

    /// OAuth 프로필로 로그인합니다.
    ///
    /// 계정 해석 순서는 모듈 문서를 따릅니다. 프로필의 이메일은 프로바이더가 검증한 것만
    /// 남아 있어야 하며([`OAuthProfile`] 변환 참고), 이 이메일로 기존 로컬 계정에 연결합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(AuthResponse)` - 찾았거나, 연결했거나, 새로 만든 사용자와 토큰
    /// * `Err(AppError::ValidationError)` - 사용 가능한 이메일이 없음. 저장소에 접근하지 않습니다.
    /// * `Err(AppError::ConflictError)` - 동시 요청으로 같은 이메일/Google ID가 먼저 저장됨
    pub async fn oauth_login(&self, profile: OAuthProfile) -> Result<AuthResponse, AppError> {
        let email = match profile.primary_email() {
            Some(email) => normalize_email(email),
            None => {
                return Err(AppError::ValidationError(
                    "Google profile does not expose an email address".to_string(),
                ))
            }
        };
        let photo = profile.primary_photo().map(str::to_string);

        if let Some(user) = self.users.find_by_google_id(&profile.provider_id).await? {
            log::info!("Google login: {}", user.email);
            return self.issue_for(user);
        }

        if let Some(existing) = self.users.find_by_email(&email).await? {
            let id = existing
                .id
                .ok_or_else(|| AppError::InternalError("Stored user has no id".to_string()))?;
            let linked = self
                .users
                .link_google_account(&id, &profile.provider_id, photo.as_deref())
                .await?
                .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))?;

            log::info!("Linked Google account to existing user: {}", linked.email);
            return self.issue_for(linked);
        }

        let name = profile
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

        let user = self
            .users
            .insert(User::new_google(name, email, profile.provider_id, photo))
            .await?;

        log::info!("User created from Google login: {}", user.email);
        self.issue_for(user)
    }

    /// 토큰에서 확인된 사용자 ID로 현재 사용자를 조회합니다.
    pub async fn current_user(&self, user_id: &str) -> Result<UserResponse, AppError> {
        let id = Self::parse_user_id(user_id)?;

        self.users
            .find_by_id(&id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))
    }

    /// `name`, `avatar` 부분 수정
    pub async fn update_profile(&self, user_id: &str, request: UpdateProfileRequest) -> Result<UserResponse, AppError> {
        if request.is_empty() {
            return Err(AppError::ValidationError("No profile fields to update".to_string()));
        }
        let id = Self::parse_user_id(user_id)?;

        self.users
            .update_profile(&id, &request)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND_MESSAGE.to_string()))
    }

    /// 관리자 계정 생성 (`seed_admin` 바이너리)
    ///
    /// 같은 이메일의 계정이 이미 있으면 아무것도 바꾸지 않고 그 계정을 돌려줍니다.
    ///
    /// # 반환값
    ///
    /// * `Ok((UserResponse, true))` - 새 관리자 계정 (`isAdmin`, `premium`)
    /// * `Ok((UserResponse, false))` - 기존 계정, 변경 없음
    pub async fn seed_admin(&self, request: RegisterRequest) -> Result<(UserResponse, bool), AppError> {
        let email = normalize_email(&request.email);

        if let Some(existing) = self.users.find_by_email(&email).await? {
            log::warn!("Admin seed skipped, account already exists: {}", existing.email);
            return Ok((UserResponse::from(existing), false));
        }

        let mut admin = User::new_local(request.name, email, self.hash_password(&request.password)?);
        admin.is_admin = true;
        admin.subscription_tier = SubscriptionTier::Premium;

        let user = self.users.insert(admin).await?;
        log::info!("Admin user created: {}", user.email);
        Ok((UserResponse::from(user), true))
    }

    fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let hash_start = Instant::now();
        let password_hash = bcrypt::hash(password, self.bcrypt_cost).context("Password hashing failed")?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());
        Ok(password_hash)
    }

    fn parse_user_id(user_id: &str) -> Result<ObjectId, AppError> {
        ObjectId::parse_str(user_id)
            .map_err(|_| AppError::AuthenticationError("Invalid or expired token".to_string()))
    }

    fn issue_for(&self, user: User) -> Result<AuthResponse, AppError> {
        let user_id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;
        let token = self.tokens.issue(&user_id)?;
        Ok(AuthResponse::new(user, token))
    }
}

#[async_trait]
impl Service for AuthService {
    fn name(&self) -> &str {
        "auth"
    }
}

fn auth_service_constructor() -> Arc<dyn Service> {
    AuthService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "auth_service",
        constructor: auth_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::oauth::google_oauth_model::google_user::GoogleUserInfo;
    use crate::repositories::memory::MemoryUserStore;

    fn setup() -> (Arc<MemoryUserStore>, Arc<TokenService>, AuthService) {
        let store = Arc::new(MemoryUserStore::default());
        let tokens = Arc::new(TokenService::new("test-secret", 7));
        let service = AuthService::new(store.clone(), tokens.clone(), 4);
        (store, tokens, service)
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "correct horse".to_string(),
        }
    }

    fn google_profile(id: &str, email: Option<&str>, photo: Option<&str>) -> OAuthProfile {
        OAuthProfile {
            provider_id: id.to_string(),
            emails: email.into_iter().map(str::to_string).collect(),
            display_name: Some("Ada Lovelace".to_string()),
            photos: photo.into_iter().map(str::to_string).collect(),
        }
    }

    #[actix_web::test]
    async fn test_register_issues_verifiable_token() {
        let (_, tokens, service) = setup();
        let response = service.register(register_request("Ada@Example.com")).await.unwrap();

        assert_eq!(response.user.email, "ada@example.com");
        assert_eq!(tokens.verify(&response.token).unwrap(), response.user.id);
    }

    #[actix_web::test]
    async fn test_register_twice_conflicts() {
        let (store, _, service) = setup();
        service.register(register_request("ada@example.com")).await.unwrap();

        let second = service.register(register_request(" ADA@example.com ")).await;
        assert!(matches!(second, Err(AppError::ConflictError(_))));
        assert_eq!(store.count(), 1);
    }

    #[actix_web::test]
    async fn test_login_success() {
        let (_, _, service) = setup();
        service.register(register_request("ada@example.com")).await.unwrap();

        let response = service
            .login(LoginRequest {
                email: "ADA@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.user.name, "Ada");
    }

    #[actix_web::test]
    async fn test_wrong_password_and_unknown_email_share_message() {
        let (_, _, service) = setup();
        service.register(register_request("ada@example.com")).await.unwrap();

        let wrong_password = service
            .login(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "battery staple".to_string(),
            })
            .await
            .unwrap_err();
        let unknown_email = service
            .login(LoginRequest {
                email: "nobody@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap_err();

        match (wrong_password, unknown_email) {
            (AppError::AuthenticationError(a), AppError::AuthenticationError(b)) => {
                assert_eq!(a, INVALID_CREDENTIALS_MESSAGE);
                assert_eq!(a, b);
            }
            other => panic!("expected two AuthenticationErrors, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn test_login_rejects_oauth_only_account() {
        let (_, _, service) = setup();
        service
            .oauth_login(google_profile("g-1", Some("ada@example.com"), None))
            .await
            .unwrap();

        let result = service
            .login(LoginRequest {
                email: "ada@example.com".to_string(),
                password: "anything".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::AuthenticationError(_))));
    }

    #[actix_web::test]
    async fn test_oauth_without_email_creates_nothing() {
        let (store, _, service) = setup();
        let result = service.oauth_login(google_profile("g-1", None, None)).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(store.count(), 0);
    }

    #[actix_web::test]
    async fn test_oauth_links_existing_email_account() {
        let (store, _, service) = setup();
        let registered = service.register(register_request("ada@example.com")).await.unwrap();

        let response = service
            .oauth_login(google_profile("g-42", Some("ada@example.com"), Some("https://img/ada.png")))
            .await
            .unwrap();

        assert_eq!(response.user.id, registered.user.id);
        assert_eq!(response.user.google_id.as_deref(), Some("g-42"));
        assert_eq!(response.user.avatar.as_deref(), Some("https://img/ada.png"));
        assert_eq!(store.count(), 1);
    }

    #[actix_web::test]
    async fn test_oauth_unverified_email_does_not_link_account() {
        let (store, _, service) = setup();
        let registered = service.register(register_request("victim@example.com")).await.unwrap();

        let info: GoogleUserInfo = serde_json::from_str(
            r#"{"id": "g-attacker", "email": "victim@example.com", "verified_email": false}"#,
        )
        .unwrap();
        let result = service.oauth_login(OAuthProfile::from(info)).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
        let victim = service.current_user(&registered.user.id).await.unwrap();
        assert!(victim.google_id.is_none());
        assert_eq!(store.count(), 1);
    }

    #[actix_web::test]
    async fn test_seed_admin_once() {
        let (store, _, service) = setup();

        let (admin, created) = service.seed_admin(register_request("Admin@Example.com")).await.unwrap();
        assert!(created);
        assert!(admin.is_admin);
        assert_eq!(admin.subscription_tier, SubscriptionTier::Premium);
        assert_eq!(admin.email, "admin@example.com");

        let (again, created) = service.seed_admin(register_request("admin@example.com")).await.unwrap();
        assert!(!created);
        assert_eq!(again.id, admin.id);
        assert_eq!(store.count(), 1);

        let login = service
            .login(LoginRequest {
                email: "admin@example.com".to_string(),
                password: "correct horse".to_string(),
            })
            .await
            .unwrap();
        assert!(login.user.is_admin);
    }

    #[actix_web::test]
    async fn test_oauth_creates_then_reuses_user() {
        let (store, _, service) = setup();
        let first = service
            .oauth_login(google_profile("g-7", Some("grace@example.com"), None))
            .await
            .unwrap();
        assert_eq!(first.user.name, "Ada Lovelace");

        let second = service
            .oauth_login(google_profile("g-7", Some("grace@example.com"), None))
            .await
            .unwrap();
        assert_eq!(first.user.id, second.user.id);
        assert_eq!(store.count(), 1);
    }

    #[actix_web::test]
    async fn test_current_user_and_update_profile() {
        let (_, _, service) = setup();
        let registered = service.register(register_request("ada@example.com")).await.unwrap();
        let user_id = registered.user.id.clone();

        let me = service.current_user(&user_id).await.unwrap();
        assert_eq!(me.email, "ada@example.com");

        let updated = service
            .update_profile(
                &user_id,
                UpdateProfileRequest {
                    name: Some("Countess".to_string()),
                    avatar: None,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Countess");
        assert_eq!(updated.email, "ada@example.com");

        let empty = service.update_profile(&user_id, UpdateProfileRequest::default()).await;
        assert!(matches!(empty, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_current_user_missing() {
        let (_, _, service) = setup();
        let result = service.current_user(&ObjectId::new().to_hex()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
