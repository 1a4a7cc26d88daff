//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 `instance()`로 얻는 프로세스 싱글톤이며, `inventory`로
//! `ServiceRegistration`에 등록되어 시작 시 초기화됩니다.
//! 서비스는 리포지토리를 store trait 객체로 보관하므로, 테스트에서는
//! 메모리 저장소를 `new()`로 주입합니다.
//!
//! # Modules
//!
//! - [`auth`] - 토큰, 회원가입/로그인, Google OAuth
//! - [`vocabulary`] - 공용 단어장
//! - [`practice`] - 연습 기록
//! - [`progress`] - 사용자별 학습 진행도
//! - [`tenses`] - 시제 참고 자료
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::vocabulary::VocabularyService;
//!
//! let service = VocabularyService::instance();
//! let check = service.check_duplicate("ubiquitous").await?;
//! ```

pub mod auth;
pub mod vocabulary;
pub mod practice;
pub mod progress;
pub mod tenses;
