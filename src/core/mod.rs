//! # Core Framework Module
//!
//! 백엔드 서비스의 핵심 프레임워크 기능입니다.
//!
//! - [`errors`] - `AppError`와 HTTP 응답 변환
//! - [`registry`] - 싱글톤 서비스/리포지토리 레지스트리 (`ServiceLocator`)
//!
//! ## 새로운 서비스 추가
//!
//! 1. 구조체 정의 + `OnceCell` 싱글톤과 `instance()` 구현
//! 2. 의존성은 `Arc<T>` 필드로 보관 (리포지토리는 store trait 객체)
//! 3. `Service` trait 구현 후 `inventory::submit!`으로 `ServiceRegistration` 제출
//! 4. 애플리케이션 시작 시 `ServiceLocator::initialize_all()`이 자동으로 생성

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
