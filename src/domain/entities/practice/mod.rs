//! 연습 기록 엔티티

pub mod practice_entry;
