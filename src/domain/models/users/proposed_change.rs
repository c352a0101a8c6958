//! # 변경 제안 모델
//!
//! 생성 본문과 두 가지 부분 갱신 본문은 모두 JSON 객체를 필드 단위로 읽어
//! 하나의 [`ProposedChange`]로 변환한 뒤 같은 검증/병합 경로를 탑니다.
//!
//! ## 필드 상태
//!
//! | JSON 입력 | [`FieldUpdate`] | 의미 |
//! |-----------|-----------------|------|
//! | 키 없음 | `Keep` | 기존 값 유지 (생성 시에는 누락으로 거부) |
//! | `null` | `Clear` | 값이 제출되었으나 비어 있음 → 검증에서 거부 |
//! | 값 | `Set(v)` | 검증 통과 시 기존 값 덮어쓰기 |
//! | 잘못된 타입/형식 | `Invalid(msg)` | 해당 필드의 위반으로 보고 |

use chrono::NaiveDate;
use serde_json::{Map, Value};

use super::UserField;
use crate::utils::date_format;

const NOT_A_STRING: &str = "must be a string";
const NOT_A_DATE: &str = "must be a date in dd.MM.yyyy format";

/// 필드 하나에 대해 제안된 변경
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// 제출되지 않음
    Keep,
    /// 새 값으로 제출됨
    Set(T),
    /// `null`로 제출됨
    Clear,
    /// 해석할 수 없는 값으로 제출됨 (위반 메시지)
    Invalid(String),
}

impl<T> FieldUpdate<T> {
    /// 요청에 이 필드가 포함되었는지 여부
    pub fn is_supplied(&self) -> bool {
        !matches!(self, FieldUpdate::Keep)
    }

    /// 제출된 값 (`Set`일 때만 `Some`)
    pub fn value(&self) -> Option<&T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            FieldUpdate::Set(value) => Some(value),
            _ => None,
        }
    }

    /// `Set`이면 새 값을, 그 외에는 `current`를 반환합니다.
    ///
    /// `Clear`와 `Invalid`는 검증 단계에서 이미 거부되므로 병합 시에는 무시합니다.
    pub fn apply(self, current: T) -> T {
        match self {
            FieldUpdate::Set(value) => value,
            FieldUpdate::Keep | FieldUpdate::Clear | FieldUpdate::Invalid(_) => current,
        }
    }
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::Keep
    }
}

/// 요청 범위의 변경 제안
///
/// 필드 식별자별로 새 값을 담으며, 검증기와 병합기에 한 번 전달된 뒤 폐기됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProposedChange {
    pub name: FieldUpdate<String>,
    pub email: FieldUpdate<String>,
    pub phone: FieldUpdate<String>,
    pub location: FieldUpdate<String>,
    pub birth_date: FieldUpdate<NaiveDate>,
}

impl ProposedChange {
    /// JSON 객체에서 `fields`에 해당하는 키만 읽어 제안을 만듭니다.
    ///
    /// 나머지 키는 무시합니다. 문자열이 아닌 값이나 `dd.MM.yyyy` 형식이 아닌 날짜는
    /// 실패시키지 않고 해당 필드를 `Invalid`로 표시하여 다른 필드와 함께 보고되게 합니다.
    pub fn from_map(map: &Map<String, Value>, fields: &[UserField]) -> Self {
        let text = |field: UserField| {
            if fields.contains(&field) {
                read_text(map.get(field.as_str()))
            } else {
                FieldUpdate::Keep
            }
        };

        ProposedChange {
            name: text(UserField::Name),
            email: text(UserField::Email),
            phone: text(UserField::Phone),
            location: text(UserField::Location),
            birth_date: if fields.contains(&UserField::BirthDate) {
                read_date(map.get(UserField::BirthDate.as_str()))
            } else {
                FieldUpdate::Keep
            },
        }
    }

    /// 제출된 필드 목록 (선언 순서)
    pub fn supplied_fields(&self) -> Vec<UserField> {
        UserField::ALL
            .into_iter()
            .filter(|field| self.is_supplied(*field))
            .collect()
    }

    pub fn is_supplied(&self, field: UserField) -> bool {
        match field {
            UserField::Name => self.name.is_supplied(),
            UserField::Email => self.email.is_supplied(),
            UserField::Phone => self.phone.is_supplied(),
            UserField::Location => self.location.is_supplied(),
            UserField::BirthDate => self.birth_date.is_supplied(),
        }
    }

    /// 필드가 `Invalid`이면 그 위반 메시지
    pub fn invalid_message(&self, field: UserField) -> Option<&str> {
        let message = match field {
            UserField::Name => invalid(&self.name),
            UserField::Email => invalid(&self.email),
            UserField::Phone => invalid(&self.phone),
            UserField::Location => invalid(&self.location),
            UserField::BirthDate => invalid(&self.birth_date),
        };
        message.map(String::as_str)
    }

    /// 아무 필드도 제출되지 않은 제안인지 여부
    pub fn is_empty(&self) -> bool {
        self.supplied_fields().is_empty()
    }
}

fn invalid<T>(update: &FieldUpdate<T>) -> Option<&String> {
    match update {
        FieldUpdate::Invalid(message) => Some(message),
        _ => None,
    }
}

fn read_text(value: Option<&Value>) -> FieldUpdate<String> {
    match value {
        None => FieldUpdate::Keep,
        Some(Value::Null) => FieldUpdate::Clear,
        Some(Value::String(value)) => FieldUpdate::Set(value.clone()),
        Some(_) => FieldUpdate::Invalid(NOT_A_STRING.to_string()),
    }
}

fn read_date(value: Option<&Value>) -> FieldUpdate<NaiveDate> {
    match value {
        None => FieldUpdate::Keep,
        Some(Value::Null) => FieldUpdate::Clear,
        Some(Value::String(raw)) => match date_format::parse_date(raw) {
            Ok(date) => FieldUpdate::Set(date),
            Err(_) => FieldUpdate::Invalid(NOT_A_DATE.to_string()),
        },
        Some(_) => FieldUpdate::Invalid(NOT_A_DATE.to_string()),
    }
}
