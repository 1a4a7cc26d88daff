//! # Domain Layer Module
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities   - MongoDB에 저장되는 문서
//! ├── DTOs       - 요청/응답 계약
//! └── Models     - 인증 컨텍스트, JWT 클레임, OAuth 프로필, 시제 참고 자료
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
pub mod models;

