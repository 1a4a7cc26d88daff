//! 관리자 계정 시드
//!
//! 서버와 같은 `.env` 설정으로 MongoDB에 접속해 관리자 계정을 한 번 만듭니다.
//! 같은 이메일의 계정이 있으면 아무것도 바꾸지 않습니다.
//!
//! ```bash
//! ADMIN_PASSWORD='change-me-now' cargo run --bin seed_admin
//! ```
//!
//! | 변수 | 기본값 |
//! |------|--------|
//! | `ADMIN_EMAIL` | `admin@vocabprep.com` |
//! | `ADMIN_NAME` | `Admin User` |
//! | `ADMIN_PASSWORD` | 없음 (필수) |

use std::env;
use std::io;
use std::sync::Arc;

use env_logger::Env;
use log::{error, info, warn};
use validator::Validate;
use vocab_prep_backend::config::PasswordConfig;
use vocab_prep_backend::db::Database;
use vocab_prep_backend::domain::dto::RegisterRequest;
use vocab_prep_backend::repositories::users::UserRepository;
use vocab_prep_backend::services::auth::{AuthService, TokenService};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let password = env::var("ADMIN_PASSWORD").map_err(|_| {
        error!("ADMIN_PASSWORD must be set");
        io::Error::other("ADMIN_PASSWORD must be set")
    })?;

    let request = RegisterRequest {
        name: env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin User".to_string()),
        email: env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@vocabprep.com".to_string()),
        password,
    };
    request.validate().map_err(|e| {
        error!("관리자 계정 정보가 올바르지 않습니다: {}", e);
        io::Error::other(e.to_string())
    })?;

    let database = Database::shared().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        io::Error::other(e.to_string())
    })?;

    let users = UserRepository::new(database);
    users.create_indexes().await.map_err(|e| io::Error::other(e.to_string()))?;

    let service = AuthService::new(Arc::new(users), TokenService::instance(), PasswordConfig::bcrypt_cost());
    let (admin, created) = service
        .seed_admin(request)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;

    if created {
        info!("✅ 관리자 계정 생성: {} (id: {})", admin.email, admin.id);
        warn!("첫 로그인 후 비밀번호를 변경하세요");
    } else {
        info!("⚠️ 이미 존재하는 계정: {} (관리자: {})", admin.email, admin.is_admin);
    }

    Ok(())
}
