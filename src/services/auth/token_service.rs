//! JWT 토큰 관리 서비스 구현
//!
//! HS256 서명 JWT를 발급하고 검증합니다. 서버에 세션 상태를 저장하지 않으며,
//! 검증 실패 원인(서명, 만료, 형식)과 관계없이 클라이언트에는 같은 메시지를 반환합니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::AppError;
use crate::core::registry::{Service, ServiceRegistration};
use crate::domain::models::token::TokenClaims;

pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

static TOKEN_SERVICE: OnceCell<Arc<TokenService>> = OnceCell::new();

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    /// 전역 인스턴스
    ///
    /// 비밀키를 얻지 못하면 프로세스마다 새로 만든 임의 키로 서명합니다.
    /// 이 경우 기본값으로 위조한 토큰은 통과하지 못하며, 서버 시작은 `init`에서 거부됩니다.
    pub fn instance() -> Arc<Self> {
        TOKEN_SERVICE
            .get_or_init(|| {
                let secret = JwtConfig::secret().unwrap_or_else(|e| {
                    log::error!("{}", e);
                    Self::ephemeral_secret()
                });
                Arc::new(Self::new(&secret, JwtConfig::expiration_days()))
            })
            .clone()
    }

    fn ephemeral_secret() -> String {
        format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
    }

    /// 사용자 ID를 `sub`로 담은 토큰을 발급합니다.
    pub fn issue(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = TokenClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료를 검증하고 사용자 ID를 반환합니다.
    pub fn verify(&self, token: &str) -> Result<String, AppError> {
        self.decode_claims(token).map(|claims| claims.sub)
    }

    pub fn decode_claims(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("Token rejected: {:?}", e.kind());
                AppError::AuthenticationError(INVALID_TOKEN_MESSAGE.to_string())
            })
    }

    /// `Authorization` 헤더 값에서 토큰 부분을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError("Invalid authorization header".to_string())),
        }
    }
}

#[async_trait]
impl Service for TokenService {
    fn name(&self) -> &str {
        "token"
    }

    async fn init(&self) -> Result<(), AppError> {
        JwtConfig::secret().map(|_| ())
    }
}

fn token_service_constructor() -> Arc<dyn Service> {
    TokenService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "token_service",
        constructor: token_service_constructor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 7)
    }

    #[test]
    fn test_issue_then_verify() {
        let tokens = service();
        let token = tokens.issue("65a1b2c3d4e5f6a7b8c9d0e1").unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), "65a1b2c3d4e5f6a7b8c9d0e1");

        let claims = tokens.decode_claims(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 7 * 24 * 3600);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = TokenService::new("other-secret", 7).issue("user").unwrap();
        match service().verify(&token) {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, INVALID_TOKEN_MESSAGE),
            other => panic!("expected AuthenticationError, got {:?}", other),
        }
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let tokens = service();
        let token = tokens.issue("user").unwrap();
        let (unsigned, signature) = token.rsplit_once('.').unwrap();
        let first = signature.chars().next().unwrap();
        let replacement = if first == 'A' { 'B' } else { 'A' };
        let tampered = format!("{}.{}{}", unsigned, replacement, &signature[1..]);
        assert!(tokens.verify(&tampered).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = service();
        let now = Utc::now();
        let claims = TokenClaims {
            sub: "user".to_string(),
            iat: (now - Duration::hours(2)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(b"test-secret")).unwrap();

        match tokens.verify(&token) {
            Err(AppError::AuthenticationError(msg)) => assert_eq!(msg, INVALID_TOKEN_MESSAGE),
            other => panic!("expected AuthenticationError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_secret_token_rejected_without_configured_secret() {
        let forged = TokenService::new(JwtConfig::DEV_SECRET, 7).issue("65a1b2c3d4e5f6a7b8c9d0e1").unwrap();
        let tokens = TokenService::new(&TokenService::ephemeral_secret(), 7);
        assert!(tokens.verify(&forged).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert!(service().verify("not.a.jwt").is_err());
        assert!(service().verify("").is_err());
    }

    #[test]
    fn test_extract_bearer_token() {
        let tokens = service();
        assert_eq!(tokens.extract_bearer_token("Bearer abc.def").unwrap(), "abc.def");
        assert!(tokens.extract_bearer_token("Basic abc").is_err());
        assert!(tokens.extract_bearer_token("Bearer ").is_err());
    }
}
