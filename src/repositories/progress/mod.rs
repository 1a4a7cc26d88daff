//! 학습 진행도 저장소

pub mod progress_store;
pub mod progress_repo;

pub use progress_repo::ProgressRepository;
pub use progress_store::ProgressStore;
