//! # Domain Entities Module
//!
//! 비즈니스 도메인의 영속 엔티티들을 정의합니다.
//! 레코드 저장소(in-memory 또는 MongoDB)에 저장되는 데이터 구조체들을 포함합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (영속 엔티티)
//! ├── models/       ← 요청 범위 모델 및 값 객체
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! ## 엔티티 설계 원칙
//!
//! - **ID는 저장소가 할당**: 저장 전 사용자는 [`users::NewUser`]로 따로 표현하여
//!   ID 없는 레코드가 존재할 수 없도록 합니다.
//! - **저장소 독립**: 엔티티는 JSON 표현만 정의하고, 저장소별 문서 구조는
//!   각 저장소 구현이 변환합니다.

pub mod users;
