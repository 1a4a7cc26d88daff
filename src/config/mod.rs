//! # Configuration Module
//!
//! 환경 변수 기반 설정값을 정적 접근자 구조체로 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 환경, 서버, 데이터베이스, 목록 limit, 요청 제한 설정
//! - [`auth_config`] - JWT, 인증 쿠키, Google OAuth 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, JwtConfig};
//!
//! let env = Environment::current();
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let secret = JwtConfig::secret()?;
//! ```
//!
//! ## 환경 변수
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export API_BASE_PATH="/api/v1"
//! export FRONTEND_URL="http://localhost:3000"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DB_NAME="vocab_prep"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_DAYS="7"
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # Google OAuth (사용 시)
//! export GOOGLE_CLIENT_ID="your-client-id"
//! export GOOGLE_CLIENT_SECRET="your-client-secret"
//! export GOOGLE_CALLBACK_URL="https://yourdomain.com/api/v1/auth/google/callback"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
