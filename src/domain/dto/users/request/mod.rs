//! 사용자 요청 DTO
//!
//! - [`parse_create_body`]: `POST /api/users`
//! - [`parse_patch_body`]: `PATCH /api/users/{id}`
//! - [`UserFields`]: 두 본문이 공유하는 필드 규칙

pub mod create_user;
pub mod update_user;
pub mod user_fields;

pub use create_user::parse_create_body;
pub use update_user::parse_patch_body;
pub use user_fields::{UserFields, PHONE_PATTERN};
