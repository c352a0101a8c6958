//! # Domain Models Module
//!
//! 영속되지 않는 도메인 모델과 값 객체를 정의하는 모듈입니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - **영속성**: 레코드 저장소에 저장되는 객체 (`UserRecord`)
//! - **정체성**: 저장소가 할당한 고유 ID를 가짐
//!
//! ### Models (`./`)
//! - **요청 범위**: 요청 하나를 처리하는 동안만 존재
//! - **값 객체**: 식별자 없이 값 자체가 의미를 가짐
//! - **예시**: `ProposedChange`, `FieldViolation`, `Violations`
//!
//! ```text
//! Domain Layer
//! ├── entities/   ← 영속 엔티티
//! ├── models/     ← 요청 범위 모델 & 값 객체 (이 모듈)
//! └── dto/        ← 데이터 전송 객체
//! ```

pub mod users;
