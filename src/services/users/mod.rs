//! 사용자 관리 서비스 모듈
//!
//! - [`user_validator`]: 필드 규칙 검증 (순수 함수)
//! - [`reconciler`]: 부분 갱신 병합 (순수 함수)
//! - [`UserService`]: 저장소 호출과 위 두 단계를 조율
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let user = service.create_user(parse_create_body(&body)).await?;
//! ```

pub mod reconciler;
pub mod user_service;
pub mod user_validator;

pub use user_service::UserService;
