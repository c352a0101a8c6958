//! 사용자 레코드 저장소
//!
//! | 구현 | 용도 |
//! |------|------|
//! | [`InMemoryUserStore`] | 기본 저장소, 테스트 |
//! | [`MongoUserStore`] | `STORE_BACKEND=mongodb` |
//!
//! 두 구현 모두 이메일 유일성을 보장하며, 위반 시 `AppError::ConstraintViolation`을 반환합니다.

pub mod memory_store;
pub mod mongo_store;
pub mod user_store;

pub use memory_store::InMemoryUserStore;
pub use mongo_store::MongoUserStore;
pub use user_store::UserStore;
