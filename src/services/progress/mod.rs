//! 학습 진행도 서비스 모듈

pub mod progress_service;

pub use progress_service::ProgressService;
