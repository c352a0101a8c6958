//! # 사용자 부분 갱신 요청
//!
//! PATCH 본문은 `birthDate` 키 유무에 따라 두 가지 방식으로 해석됩니다.
//!
//! | 본문 | 해석 | 알 수 없는 키 | `birthDate` |
//! |------|------|---------------|-------------|
//! | `birthDate` 포함 | 엄격 (다섯 필드) | 거부 | 갱신 가능 |
//! | `birthDate` 없음 | key/value 맵 | 무시 | - |
//!
//! 두 방식 모두 같은 필드 리더를 사용하므로, 잘못된 타입이나 날짜 형식은
//! 해당 필드의 위반으로 보고됩니다.

use log::debug;
use serde_json::{Map, Value};

use crate::core::errors::{AppError, AppResult};
use crate::domain::models::users::{ProposedChange, UserField};

const PATCH_MAP_FIELDS: [UserField; 4] = [
    UserField::Name,
    UserField::Email,
    UserField::Phone,
    UserField::Location,
];

/// PATCH 본문을 [`ProposedChange`]로 변환합니다.
///
/// # Errors
///
/// * `AppError::BadRequest` - `birthDate`를 포함한 본문에 알 수 없는 키가 있음
pub fn parse_patch_body(body: &Map<String, Value>) -> AppResult<ProposedChange> {
    if !body.contains_key(UserField::BirthDate.as_str()) {
        return Ok(ProposedChange::from_map(body, &PATCH_MAP_FIELDS));
    }

    let unknown: Vec<&str> = body
        .keys()
        .map(String::as_str)
        .filter(|key| !UserField::ALL.iter().any(|field| field.as_str() == *key))
        .collect();
    if !unknown.is_empty() {
        debug!("PATCH 본문의 알 수 없는 키: {:?}", unknown);
        return Err(AppError::BadRequest(format!(
            "Invalid update request: unknown field(s) {}",
            unknown.join(", ")
        )));
    }

    Ok(ProposedChange::from_map(body, &UserField::ALL))
}
