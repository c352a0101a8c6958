//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs    # POST 본문
//! │   ├── update_user.rs    # PATCH 본문 (엄격 / key-value 맵)
//! │   └── user_fields.rs    # #[derive(Validate)] 필드 규칙
//! └── response/
//!     └── user_response.rs  # 사용자 응답
//! ```
//!
//! 요청 본문은 필드 단위로 [`ProposedChange`](crate::domain::models::users::ProposedChange)로
//! 읽히고, 서비스 계층의 검증기가 [`request::UserFields`] 규칙으로 검사합니다.

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
