//! 애플리케이션 설정 모듈
//!
//! 모든 설정은 환경 변수에서 읽으며, `.env` 파일은 `main`에서 `PROFILE`에 따라 로드됩니다.

pub mod data_config;

pub use data_config::*;
