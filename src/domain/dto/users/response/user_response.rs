use serde::{Deserialize, Serialize};

use crate::domain::entities::users::{UserId, UserRecord};
use crate::utils::date_format;

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,

    /// `dd.MM.yyyy`
    pub birth_date: String,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        let UserRecord {
            id,
            name,
            email,
            phone,
            location,
            birth_date,
        } = user;

        Self {
            id,
            name,
            email,
            phone,
            location,
            birth_date: date_format::format_date(&birth_date),
        }
    }
}

/// 삭제 완료 시 반환하는 확인 문구
pub const USER_DELETED: &str = "User is deleted";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_from_record() {
        let record = UserRecord {
            id: 3,
            name: "Test_User".to_string(),
            email: "test1@example.com".to_string(),
            phone: "89609062424".to_string(),
            location: "Test_Location".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1985, 6, 15).unwrap(),
        };
        let response = UserResponse::from(record);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["birthDate"], "15.06.1985");
        assert_eq!(json["phone"], "89609062424");
    }
}
