//! 어휘 학습 백엔드 메인 애플리케이션
//!
//! 환경 설정을 읽고 MongoDB 연결과 서비스 레지스트리를 초기화한 뒤
//! Actix-web HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use vocab_prep_backend::config::{JwtConfig, RateLimitConfig, ServerConfig};
use vocab_prep_backend::core::registry::ServiceLocator;
use vocab_prep_backend::db::Database;
use vocab_prep_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 Vocabulary backend starting...");

    JwtConfig::secret().map_err(|e| {
        error!("JWT 설정 오류: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    let database = Database::shared().await.map_err(|e| {
        error!("데이터베이스 연결 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    ServiceLocator::set(database);

    ServiceLocator::initialize_all().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server().await
}

async fn start_http_server() -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();
    let base_path = ServerConfig::api_base_path();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);
    info!("📍 API: http://{}:{}{}", host, port, base_path);

    let per_second = RateLimitConfig::per_second();
    let burst_size = RateLimitConfig::burst_size();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(per_second)
        .burst_size(burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Invalid rate limit configuration"))?;

    info!("🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개", per_second, burst_size);

    let frontend_url = ServerConfig::frontend_url();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&frontend_url))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind((host.as_str(), port))?;

    let server = match ServerConfig::workers() {
        Some(workers) => server.workers(workers),
        None => server,
    };

    server.run().await
}

/// `PROFILE`에 따라 `.env.prod`, `.env.dev`, `.env` 중 하나를 로드합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => {
            if let Err(e) = dotenv::from_filename(".env.prod") {
                warn!(".env.prod 파일 로드 실패: {}", e);
            }
        }
        "dev" => {
            if let Err(e) = dotenv::from_filename(".env.dev") {
                warn!(".env.dev 파일 로드 실패: {}", e);
            }
        }
        _ => {
            dotenv().ok();
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 프론트엔드 origin 하나만 허용하고 쿠키 자격 증명을 지원합니다.
fn configure_cors(frontend_url: &str) -> Cors {
    Cors::default()
        .allowed_origin(frontend_url)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
