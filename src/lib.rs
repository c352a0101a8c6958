//! 아비아 스캐너 사용자 프로필 백엔드
//!
//! 여행 예약 서비스의 사용자 프로필을 관리하는 REST API입니다.
//! 입력 검증과 부분 갱신 병합을 순수 함수로 분리하고,
//! 레코드 저장소는 in-memory 또는 MongoDB 중에서 선택합니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: 목록/이름 조회, 생성, 부분 갱신, 삭제
//! - **필드 검증**: 모든 위반 사항을 필드 선언 순서대로 집계
//! - **부분 갱신**: 엄격한 본문과 key/value 맵 두 가지 입력 형태 지원
//! - **구조화된 에러**: `timestamp`, `status`, `error`, `message`, `path`
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 경로가 붙은 에러 응답
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증기 → 병합기 → 저장
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore trait
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Memory / MongoDB│ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use avia_scanner_backend::repositories::users::InMemoryUserStore;
//! use avia_scanner_backend::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(InMemoryUserStore::new()));
//! let user = service.create_user(request.into()).await?;
//! ```

pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
