//! 시제 참고 자료 모델

pub mod tense;

pub use tense::TenseEntry;
