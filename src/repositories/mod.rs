//! # Repository Layer
//!
//! 데이터 액세스 계층입니다. 각 컬렉션마다 두 가지를 제공합니다.
//!
//! - **Store trait** (`UserStore`, `VocabularyStore`, `PracticeStore`, `ProgressStore`):
//!   서비스가 의존하는 인터페이스
//! - **MongoDB 리포지토리**: trait 구현 + `Repository` 등록 (시작 시 인덱스 생성)
//!
//! 테스트에서는 [`memory`] 모듈의 메모리 구현을 서비스에 주입합니다.

pub mod mongo_errors;
pub mod users;
pub mod vocabulary;
pub mod practice;
pub mod progress;

#[cfg(test)]
pub mod memory;

pub use practice::{PracticeRepository, PracticeStore};
pub use progress::{ProgressRepository, ProgressStore};
pub use users::{UserRepository, UserStore};
pub use vocabulary::{VocabularyRepository, VocabularyStore};
