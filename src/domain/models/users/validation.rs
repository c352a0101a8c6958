//! 검증 결과 모델
//!
//! `validator::ValidationErrors`는 필드 이름을 키로 하는 맵이라 보고 순서가 보장되지 않습니다.
//! 위반 내역은 필드 선언 순서대로 보고해야 하므로 순서가 있는 목록으로 따로 표현합니다.

use std::fmt;

use super::UserField;

/// 필드 하나에 대한 규칙 위반
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: UserField,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: UserField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 순서가 있는 위반 목록
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldViolation> {
        self.0.iter()
    }

    /// 위반이 보고된 필드 목록 (보고 순서)
    pub fn fields(&self) -> Vec<UserField> {
        self.0.iter().map(|v| v.field).collect()
    }

    /// 위반이 없으면 `value`를 승인하고, 있으면 거부합니다.
    pub fn into_result<T>(self, value: T) -> ValidationResult<T> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl From<Vec<FieldViolation>> for Violations {
    fn from(violations: Vec<FieldViolation>) -> Self {
        Self(violations)
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

/// 검증 결과: `Ok`는 승인된 값, `Err`는 거부 사유 목록
pub type ValidationResult<T> = Result<T, Violations>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_in_order() {
        let violations = Violations::from(vec![
            FieldViolation::new(UserField::Name, "must not be empty"),
            FieldViolation::new(UserField::Phone, "incorrect phone number"),
        ]);

        assert_eq!(
            violations.to_string(),
            "name: must not be empty; phone: incorrect phone number"
        );
        assert_eq!(violations.fields(), vec![UserField::Name, UserField::Phone]);
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Violations::new().into_result(7), Ok(7));

        let mut violations = Violations::new();
        violations.push(FieldViolation::new(UserField::Email, "must not be blank"));
        assert!(violations.into_result(7).is_err());
    }
}
