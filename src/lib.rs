//! 어휘 학습 백엔드
//!
//! 영어 시험(IELTS, TOEFL, GRE) 준비를 위한 REST API 서버입니다.
//! 이메일/비밀번호 및 Google OAuth 로그인, 공용 단어장, 연습 기록,
//! 사용자별 학습 진행도, 시제 참고 자료를 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 규칙 (store trait에 의존)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← MongoDB 접근, 유니크 인덱스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │
//! └─────────────────┘
//! ```
//!
//! 서비스와 리포지토리는 `inventory`로 등록되는 싱글톤이며,
//! 시작 시 [`core::registry::ServiceLocator::initialize_all`]이 생성과 초기화를 수행합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use vocab_prep_backend::services::auth::AuthService;
//!
//! let auth = AuthService::instance().login(request).await?;
//! println!("token: {}", auth.token);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
