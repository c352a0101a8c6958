//! # 사용자 관련 응답 DTO 모듈
//!
//! 저장된 [`UserRecord`](crate::domain::entities::users::UserRecord)를
//! 클라이언트에 전달하는 JSON 형태로 변환합니다.
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "Test_User",
//!   "email": "test1@example.com",
//!   "phone": "+79609062424",
//!   "location": "Test_Location",
//!   "birthDate": "01.01.1990"
//! }
//! ```

pub mod user_response;

pub use user_response::{UserResponse, USER_DELETED};
