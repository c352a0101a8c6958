//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! | 모듈 | 역할 |
//! |------|------|
//! | [`users`] | 사용자 요청/응답 본문 |
//! | [`error_response`] | 모든 에러 응답이 공유하는 구조화된 본문 |
//!
//! 모든 필드는 camelCase로, 날짜는 `dd.MM.yyyy` 형식으로 직렬화됩니다.

pub mod error_response;
pub mod users;

pub use error_response::ErrorResponse;
