use std::fmt;

/// 사용자 레코드의 필드 식별자
///
/// 변형의 선언 순서는 검증 위반이 보고되는 순서와 같습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Name,
    Email,
    Phone,
    Location,
    BirthDate,
}

impl UserField {
    /// 선언 순서대로 나열한 모든 필드
    pub const ALL: [UserField; 5] = [
        UserField::Name,
        UserField::Email,
        UserField::Phone,
        UserField::Location,
        UserField::BirthDate,
    ];

    /// JSON 표현에서 사용하는 필드 이름
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Phone => "phone",
            UserField::Location => "location",
            UserField::BirthDate => "birthDate",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
