//! HTTP 요청 핸들러 모듈
//!
//! - [`users`]: `/api/users` CRUD
//! - [`pages`]: `/`, `/main`, `/dates`, `/hotels` 페이지 식별자

pub mod pages;
pub mod users;
