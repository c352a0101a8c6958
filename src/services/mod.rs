//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 저장소를 주입받아 생성되고, `web::Data`로 핸들러에 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let service = web::Data::new(UserService::new(store));
//! App::new().app_data(service.clone())
//! ```

pub mod users;
