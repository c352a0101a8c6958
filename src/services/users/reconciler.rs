//! 부분 갱신 병합기
//!
//! 저장된 레코드에 제안된 변경을 적용해 저장할 레코드를 계산합니다.
//! 호출자는 레코드 존재 여부와 검증을 먼저 마쳐야 합니다.

use crate::domain::entities::users::UserRecord;
use crate::domain::models::users::ProposedChange;

/// 값이 제출된 필드만 덮어쓰고 나머지는 기존 값을 유지합니다.
///
/// `id`는 변경되지 않습니다.
pub fn reconcile(existing: UserRecord, change: ProposedChange) -> UserRecord {
    UserRecord {
        id: existing.id,
        name: change.name.apply(existing.name),
        email: change.email.apply(existing.email),
        phone: change.phone.apply(existing.phone),
        location: change.location.apply(existing.location),
        birth_date: change.birth_date.apply(existing.birth_date),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::users::FieldUpdate;
    use chrono::NaiveDate;

    fn existing() -> UserRecord {
        UserRecord {
            id: 1,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            phone: "+79609062424".to_string(),
            location: "L".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_only_supplied_fields_replaced() {
        let change = ProposedChange {
            name: FieldUpdate::Set("B".to_string()),
            ..ProposedChange::default()
        };
        let merged = reconcile(existing(), change);

        assert_eq!(
            merged,
            UserRecord {
                name: "B".to_string(),
                ..existing()
            }
        );
    }

    #[test]
    fn test_empty_change_is_identity() {
        assert_eq!(reconcile(existing(), ProposedChange::default()), existing());
    }

    #[test]
    fn test_birth_date_and_multiple_fields() {
        let change = ProposedChange {
            phone: FieldUpdate::Set("89609062425".to_string()),
            location: FieldUpdate::Set("Moscow".to_string()),
            birth_date: FieldUpdate::Set(NaiveDate::from_ymd_opt(1985, 6, 15).unwrap()),
            ..ProposedChange::default()
        };
        let merged = reconcile(existing(), change);

        assert_eq!(merged.id, 1);
        assert_eq!(merged.name, "A");
        assert_eq!(merged.email, "a@x.com");
        assert_eq!(merged.phone, "89609062425");
        assert_eq!(merged.location, "Moscow");
        assert_eq!(merged.birth_date, NaiveDate::from_ymd_opt(1985, 6, 15).unwrap());
    }
}
