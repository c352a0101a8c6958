//! # Domain Layer Module
//!
//! 사용자 프로필 도메인의 데이터 구조와 규칙을 담당하는 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - 영속 사용자 레코드 (UserRecord, NewUser)
//! ├── models    - 요청 범위 모델 (ProposedChange, Violations, UserField)
//! └── dto       - API 요청/응답 및 에러 본문
//!      │
//!      ▼
//! Application Layer (services: 검증기, 병합기, UserService)
//!      │
//!      ▼
//! Infrastructure Layer (repositories: in-memory / MongoDB 저장소)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! POST 본문 ────────┐
//! PATCH 엄격 본문 ───┼─► ProposedChange ─► UserFields 검증 ─► 병합 ─► UserRecord ─► UserResponse
//! PATCH key/value 맵 ┘                          │
//!                                               └─► Violations (400)
//! ```
//!
//! 세 하위 모듈 모두 `users` 모듈을 가지므로 glob re-export는 하지 않습니다.

pub mod dto;
pub mod entities;
pub mod models;
