//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 공백 검사 유틸리티
//! - [`date_format`] - `dd.MM.yyyy` 형식의 날짜 직렬화/역직렬화
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::date_format;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Trip {
//!     #[serde(with = "date_format")]
//!     departure: NaiveDate,
//! }
//! ```

pub mod string_utils;
pub mod date_format;
