//! 연습 기록 서비스 모듈

pub mod practice_service;

pub use practice_service::PracticeService;
