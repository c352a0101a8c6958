//! # 구조화된 에러 응답 DTO
//!
//! 모든 4xx/5xx 응답은 같은 형태의 본문을 사용합니다.
//!
//! ```json
//! {
//!   "timestamp": "2024-06-01T12:00:00.123",
//!   "status": 400,
//!   "error": "Bad Request",
//!   "message": "Validation failed: phone: incorrect phone number",
//!   "path": "/api/users"
//! }
//! ```

use actix_web::http::StatusCode;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 에러 응답 본문
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 에러 발생 시각 (서버 로컬 시간)
    pub timestamp: NaiveDateTime,
    /// HTTP 상태 코드
    pub status: u16,
    /// 상태 코드의 표준 사유 문구 (`Not Found`, `Bad Request` 등)
    pub error: String,
    pub message: String,
    /// 실패한 요청의 경로
    pub path: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now().naive_local(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Unknown").to_string(),
            message: message.into(),
            path: path.into(),
        }
    }
}
