//! # 사용자 생성 요청
//!
//! POST 본문은 JSON 객체로 받아 다섯 필드를 필드 단위로 읽습니다.
//! 누락, 잘못된 타입, 잘못된 날짜 형식은 역직렬화 실패가 아니라 해당 필드의 위반으로
//! 다른 규칙 위반과 함께 보고됩니다.
//! 클라이언트가 보낸 `id`와 알 수 없는 키는 무시되며 저장소가 새 ID를 할당합니다.
//!
//! ```json
//! {
//!   "name": "Test_User",
//!   "email": "test1@example.com",
//!   "phone": "+79609062424",
//!   "location": "Test_Location",
//!   "birthDate": "01.01.1990"
//! }
//! ```

use serde_json::{Map, Value};

use crate::domain::models::users::{ProposedChange, UserField};

/// POST 본문을 [`ProposedChange`]로 변환합니다.
pub fn parse_create_body(body: &Map<String, Value>) -> ProposedChange {
    ProposedChange::from_map(body, &UserField::ALL)
}
