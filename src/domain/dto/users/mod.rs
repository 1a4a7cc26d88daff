//! 사용자 및 인증 DTO

mod request;
mod response;

pub use request::*;
pub use response::*;
