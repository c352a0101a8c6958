//! User Entity Implementation
//!
//! 여행 예약 서비스의 사용자 프로필 엔티티입니다.
//! JSON 표현은 camelCase 필드명과 `dd.MM.yyyy` 날짜 형식을 사용합니다.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::date_format;

/// 저장소가 부여하는 사용자 식별자
pub type UserId = i64;

/// 영속된 사용자 레코드
///
/// 저장된 모든 레코드는 다섯 필드 규칙을 동시에 만족합니다.
/// `email`의 유일성은 저장소가 보장합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// 저장소가 할당한 ID (한 번 할당되면 변경되지 않음)
    pub id: UserId,
    pub name: String,
    /// 이메일 (unique)
    pub email: String,
    /// `+7` 또는 `8` 뒤에 숫자 10자리
    pub phone: String,
    pub location: String,
    /// 생년월일 (오늘 이전)
    #[serde(with = "date_format")]
    pub birth_date: NaiveDate,
}

/// 검증을 통과했지만 아직 ID가 없는 사용자
///
/// 저장소의 `save`에 전달되면 ID가 할당된 [`UserRecord`]가 됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub birth_date: NaiveDate,
}

impl NewUser {
    /// 할당된 ID로 레코드를 완성합니다.
    pub fn with_id(self, id: UserId) -> UserRecord {
        UserRecord {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            location: self.location,
            birth_date: self.birth_date,
        }
    }
}
