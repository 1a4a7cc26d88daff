//! 사용자 계정 엔티티

pub mod user;
