//! # 사용자 필드 규칙 DTO
//!
//! 요청 본문에서 읽어낸 후보 값을 `#[derive(Validate)]` 규칙으로 검사하기 위한 구조체입니다.
//! 값이 없는 필드(`None`)는 규칙을 건너뛰며, 누락/`null` 판정은 검증기가 따로 합니다.
//!
//! | 필드 | 규칙 | 에러 코드 |
//! |------|------|-----------|
//! | `name` | `length(min = 1)` | `length` |
//! | `email` | 공백 불가, `email` | `not_blank`, `email` |
//! | `phone` | 공백 불가, `regex(^(\+7\|8)[0-9]{10}$)` | `not_blank`, `regex` |
//! | `location` | `length(min = 1)` | `length` |
//! | `birth_date` | 기준 날짜(context)보다 이전 | `past` |
//!
//! 기준 날짜를 context로 받으므로 `validate()` 대신
//! [`ValidateArgs::validate_with_args`](validator::ValidateArgs::validate_with_args)로 호출합니다.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::{Validate, ValidationError};

use crate::domain::models::users::{ProposedChange, UserField};
use crate::utils::string_utils::is_valid_string;

/// 러시아 휴대전화 번호: `+7` 또는 `8` 뒤에 ASCII 숫자 10자리
pub static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+7|8)[0-9]{10}$").expect("phone pattern must compile"));

/// 규칙 검사 대상 필드 값
#[derive(Debug, Clone, Default, Validate)]
#[validate(context = NaiveDate)]
pub struct UserFields {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: Option<String>,

    #[validate(
        custom(function = "not_blank"),
        email(message = "must be a well-formed email address")
    )]
    pub email: Option<String>,

    #[validate(
        custom(function = "not_blank"),
        regex(path = *PHONE_PATTERN, message = "incorrect phone number")
    )]
    pub phone: Option<String>,

    #[validate(length(min = 1, message = "must not be empty"))]
    pub location: Option<String>,

    #[validate(custom(function = "in_the_past", use_context))]
    pub birth_date: Option<NaiveDate>,
}

impl UserFields {
    /// [`ValidationErrors::field_errors`](validator::ValidationErrors::field_errors)의 키
    pub fn error_key(field: UserField) -> &'static str {
        match field {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Phone => "phone",
            UserField::Location => "location",
            UserField::BirthDate => "birth_date",
        }
    }
}

impl From<&ProposedChange> for UserFields {
    fn from(change: &ProposedChange) -> Self {
        UserFields {
            name: change.name.value().cloned(),
            email: change.email.value().cloned(),
            phone: change.phone.value().cloned(),
            location: change.location.value().cloned(),
            birth_date: change.birth_date.value().copied(),
        }
    }
}

/// 공백 문자만으로 이루어진 값을 거부합니다.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if !is_valid_string(value) {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// 생년월일은 기준 날짜보다 엄격하게 이전이어야 합니다.
fn in_the_past(birth_date: &NaiveDate, today: &NaiveDate) -> Result<(), ValidationError> {
    if birth_date >= today {
        return Err(ValidationError::new("past")
            .with_message("birth date must be in the past".into()));
    }
    Ok(())
}
