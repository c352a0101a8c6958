//! # Core Framework Module
//!
//! 백엔드 전역에서 사용하는 핵심 기능을 제공하는 모듈입니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 서비스/저장소 계층의 명시적 에러 타입
//! - **RequestError**: 요청 경로가 결합된 HTTP 경계 에러
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 구조화된 에러 본문 생성

pub mod errors;

pub use errors::*;
