//! 어휘 저장소

pub mod vocabulary_store;
pub mod vocabulary_repo;

pub use vocabulary_repo::VocabularyRepository;
pub use vocabulary_store::VocabularyStore;
