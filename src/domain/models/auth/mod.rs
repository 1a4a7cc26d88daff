//! 요청 인증 컨텍스트

pub mod authenticated_user;

pub use authenticated_user::AuthenticatedUser;
