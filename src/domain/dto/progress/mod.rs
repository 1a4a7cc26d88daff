//! 학습 진행도 DTO

mod request;
mod response;

pub use request::*;
pub use response::*;
