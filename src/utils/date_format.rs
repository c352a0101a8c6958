//! `dd.MM.yyyy` 날짜 형식 serde 모듈
//!
//! API의 모든 날짜 필드는 `31.12.1990` 형식으로 주고받습니다.
//! 응답/저장 구조체는 `#[serde(with = "date_format")]`로, 요청 본문 해석은 [`parse_date`]로 사용합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

/// chrono 형식 문자열 (`dd.MM.yyyy`)
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// `dd.MM.yyyy` 문자열을 날짜로 해석합니다.
pub fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}

/// 날짜를 `dd.MM.yyyy` 문자열로 변환합니다.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(|e| {
        serde::de::Error::custom(format!("invalid date '{}', expected dd.MM.yyyy: {}", raw, e))
    })
}
