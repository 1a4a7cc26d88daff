//! 학습 진행도 엔티티

pub mod user_progress;
