//! 사용자 도메인의 요청 범위 모델
//!
//! - [`UserField`] - 사용자 필드 식별자 (선언 순서가 곧 검증 보고 순서)
//! - [`FieldUpdate`] / [`ProposedChange`] - 부분 갱신에서 제안된 필드 값
//! - [`FieldViolation`] / [`Violations`] - 검증 실패 내역

pub mod user_field;
pub mod proposed_change;
pub mod validation;

pub use user_field::UserField;
pub use proposed_change::{FieldUpdate, ProposedChange};
pub use validation::{FieldViolation, ValidationResult, Violations};
