//! Users Entity Module
//!
//! 사용자 도메인의 영속 엔티티를 정의하는 모듈입니다.
//!
//! - [`UserRecord`](user::UserRecord): 저장소에 저장된 사용자 (ID 포함)
//! - [`NewUser`](user::NewUser): 검증을 통과해 저장을 기다리는 사용자 (ID 없음)
//!
//! ```rust,ignore
//! let record = store.save(new_user).await?;
//! assert!(record.id > 0);
//! ```

pub mod user;

pub use user::{NewUser, UserId, UserRecord};
