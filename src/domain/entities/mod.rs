//! # Domain Entities
//!
//! MongoDB 컬렉션에 저장되는 문서 타입입니다.
//!
//! | 엔티티 | 컬렉션 |
//! |--------|--------|
//! | [`User`] | `users` |
//! | [`VocabularyEntry`] | `vocabularies` |
//! | [`PracticeEntry`] | `practiceentries` |
//! | [`UserProgress`] | `userprogresses` |
//!
//! 필드는 camelCase로 저장되며, 타임스탬프는 BSON `DateTime`입니다.

pub mod enums;
pub mod users;
pub mod vocabulary;
pub mod practice;
pub mod progress;

pub use enums::*;
pub use users::user::User;
pub use vocabulary::vocabulary_entry::VocabularyEntry;
pub use practice::practice_entry::PracticeEntry;
pub use progress::user_progress::UserProgress;
