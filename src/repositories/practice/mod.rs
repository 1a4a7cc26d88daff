//! 연습 기록 저장소

pub mod practice_store;
pub mod practice_repo;

pub use practice_repo::PracticeRepository;
pub use practice_store::PracticeStore;
