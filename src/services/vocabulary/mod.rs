//! 어휘 서비스 모듈

pub mod vocabulary_service;

pub use vocabulary_service::VocabularyService;
