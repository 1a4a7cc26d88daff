//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 입력 문자열 정리, 이메일 정규화, 정규식 이스케이프
//! - [`date_utils`] - BSON 날짜를 응답용 `chrono` 날짜로 변환
//! - [`object_id_utils`] - 경로 ID 파싱
//! - [`display_terminal`] - 시작 시 레지스트리 초기화 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::escape_regex;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let pattern = escape_regex("e.g.");
//! print_boxed_title("System Initialized");
//! ```

pub mod string_utils;
pub mod date_utils;
pub mod object_id_utils;
pub mod display_terminal;
