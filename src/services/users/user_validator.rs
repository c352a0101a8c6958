//! # 사용자 필드 검증기
//!
//! 후보 값 집합을 필드 규칙에 따라 승인하거나 거부하는 순수 함수들입니다.
//! 저장소에 접근하지 않으며, 결과는 입력과 기준 날짜(`today`)에만 의존합니다.
//!
//! ## 필드 규칙
//!
//! | 필드 | 규칙 | 위반 메시지 |
//! |------|------|-------------|
//! | `name` | null/빈 문자열 불가 | `must not be empty` |
//! | `email` | null/공백 불가, `local@domain` 형식 | `must not be blank`, `must be a well-formed email address` |
//! | `phone` | null/공백 불가, `^(\+7\|8)[0-9]{10}$` | `must not be blank`, `incorrect phone number` |
//! | `location` | null/빈 문자열 불가 | `must not be empty` |
//! | `birthDate` | null 불가, `today` 이전 | `must not be null`, `birth date must be in the past` |
//!
//! 값 규칙은 [`UserFields`]의 `#[derive(Validate)]`가 평가합니다.
//! 필드마다 판정 우선순위는 해석 실패(잘못된 타입/형식), 값 없음, 값 규칙 순이며
//! 위반된 필드마다 정확히 하나의 메시지가 필드 선언 순서대로 보고됩니다.

use chrono::NaiveDate;
use validator::{ValidateArgs, ValidationErrors};

use crate::domain::dto::users::request::UserFields;
use crate::domain::entities::users::NewUser;
use crate::domain::models::users::{
    FieldViolation, ProposedChange, UserField, ValidationResult, Violations,
};

/// 값이 없을 때(누락 또는 `null`)의 위반 메시지
fn missing_message(field: UserField) -> &'static str {
    match field {
        UserField::Name | UserField::Location => "must not be empty",
        UserField::Email | UserField::Phone => "must not be blank",
        UserField::BirthDate => "must not be null",
    }
}

fn has_value(change: &ProposedChange, field: UserField) -> bool {
    match field {
        UserField::Name => change.name.value().is_some(),
        UserField::Email => change.email.value().is_some(),
        UserField::Phone => change.phone.value().is_some(),
        UserField::Location => change.location.value().is_some(),
        UserField::BirthDate => change.birth_date.value().is_some(),
    }
}

/// 파생 규칙이 보고한 필드 에러 중 하나를 고릅니다. 공백 판정이 형식 판정보다 앞섭니다.
fn rule_message(errors: &ValidationErrors, field: UserField) -> Option<String> {
    let field_errors = errors.field_errors();
    let errors = field_errors.get(UserFields::error_key(field))?;
    let error = errors
        .iter()
        .find(|e| e.code == "not_blank")
        .or_else(|| errors.first())?;

    Some(
        error
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| error.code.to_string()),
    )
}

fn collect(change: &ProposedChange, fields: &[UserField], today: NaiveDate) -> Violations {
    let rule_errors = UserFields::from(change).validate_with_args(&today).err();

    let mut violations = Violations::new();
    for field in fields {
        let message = if let Some(message) = change.invalid_message(*field) {
            Some(message.to_string())
        } else if !has_value(change, *field) {
            Some(missing_message(*field).to_string())
        } else {
            rule_errors
                .as_ref()
                .and_then(|errors| rule_message(errors, *field))
        };

        if let Some(message) = message {
            violations.push(FieldViolation::new(*field, message));
        }
    }
    violations
}

/// 생성용 전체 검증
///
/// 다섯 필드 모두 값이 있어야 하며, 승인되면 저장 가능한 [`NewUser`]를 반환합니다.
pub fn validate_new_user(change: ProposedChange, today: NaiveDate) -> ValidationResult<NewUser> {
    let violations = collect(&change, &UserField::ALL, today);
    if !violations.is_empty() {
        return Err(violations);
    }

    let ProposedChange {
        name,
        email,
        phone,
        location,
        birth_date,
    } = change;

    match (
        name.into_value(),
        email.into_value(),
        phone.into_value(),
        location.into_value(),
        birth_date.into_value(),
    ) {
        (Some(name), Some(email), Some(phone), Some(location), Some(birth_date)) => Ok(NewUser {
            name,
            email,
            phone,
            location,
            birth_date,
        }),
        _ => Err(violations),
    }
}

/// 부분 갱신용 검증
///
/// 제출된 필드만 평가합니다. `null`로 제출된 필드는 해당 규칙에서 거부됩니다.
pub fn validate_change(change: &ProposedChange, today: NaiveDate) -> ValidationResult<()> {
    let supplied = change.supplied_fields();
    collect(change, &supplied, today).into_result(())
}
