//! 시제 참고 자료 서비스 모듈

pub mod tense_service;

pub use tense_service::TenseService;
