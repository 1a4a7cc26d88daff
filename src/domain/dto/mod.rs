//! # Data Transfer Objects (DTO) Module
//!
//! API 경계의 요청/응답 계약을 정의합니다.
//!
//! - 요청 DTO는 `serde`로 역직렬화되며 문자열은 이 시점에 trim 됩니다.
//!   이후 핸들러에서 `validator::Validate`로 검증하고, 실패 시 필드별 메시지와 함께 400을 반환합니다.
//! - 응답 DTO는 엔티티에서 `From`으로 변환되며, 식별자는 `_id` 문자열,
//!   필드명은 camelCase, 날짜는 RFC 3339 문자열입니다.
//!
//! ```text
//! dto/
//! ├── users/        # 회원가입, 로그인, 프로필, OAuth 콜백
//! ├── vocabulary/   # 어휘 생성/수정/필터/중복 확인
//! ├── practice/     # 연습 기록 생성/필터
//! └── progress/     # 진행도 변경/필터/통계
//! ```

pub mod users;
pub mod vocabulary;
pub mod practice;
pub mod progress;

pub use users::*;
pub use vocabulary::*;
pub use practice::*;
pub use progress::*;
