//! 어휘 항목 엔티티

pub mod vocabulary_entry;
