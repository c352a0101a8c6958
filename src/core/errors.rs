//! # Application Error Handling System
//!
//! 사용자 프로필 백엔드의 통합 에러 처리 시스템입니다.
//! 서비스 계층은 [`AppError`]를 명시적인 `Result` 값으로 반환하고,
//! HTTP 경계에서는 [`RequestError`]가 요청 경로를 붙여 구조화된 에러 본문으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필드 규칙 위반 (모든 위반 사항 집계) |
//! | `ConstraintViolation` | 400 Bad Request | 저장소 제약 위반 (이메일 중복 등) |
//! | `BadRequest` | 400 Bad Request | 잘못된 JSON 본문, 잘못된 ID 형식 |
//! | `NotFound` | 404 Not Found | 존재하지 않는 사용자 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 통신 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "timestamp": "2024-06-01T12:00:00.123",
//!   "status": 404,
//!   "error": "Not Found",
//!   "message": "User not found",
//!   "path": "/api/users/100"
//! }
//! ```
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! #[get("/{id}")]
//! pub async fn get_user(
//!     req: HttpRequest,
//!     service: web::Data<UserService>,
//!     id: web::Path<i64>,
//! ) -> Result<HttpResponse, RequestError> {
//!     let user = service.get_user(*id).await.at_path(&req)?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use thiserror::Error;

use crate::domain::dto::error_response::ErrorResponse;
use crate::domain::models::users::Violations;

/// 사용자를 찾지 못했을 때 응답에 사용하는 고정 메시지
pub const USER_NOT_FOUND: &str = "User not found";

/// 애플리케이션 전역 에러 타입
///
/// 서비스와 저장소 계층에서 발생할 수 있는 모든 실패를 표현합니다.
/// 재시도나 부분 성공은 없으며, 모든 변형은 호출자에게 즉시 전달되는 최종 결과입니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 하나 이상의 필드 규칙 위반
    ///
    /// 위반 목록은 필드 선언 순서(`name`, `email`, `phone`, `location`, `birthDate`)를 따릅니다.
    #[error("Validation failed: {0}")]
    ValidationError(Violations),

    /// 요청한 리소스가 저장소에 없음
    #[error("{0}")]
    NotFound(String),

    /// 저장소 수준의 제약 조건 위반
    ///
    /// 이메일 유일성은 저장소가 보장하며, 코어 로직은 이를 미리 검사하지 않습니다.
    /// 저장소가 보고한 메시지를 그대로 전달합니다.
    #[error("{0}")]
    ConstraintViolation(String),

    /// 요청 본문이나 경로 파라미터를 해석할 수 없음
    #[error("{0}")]
    BadRequest(String),

    /// 저장소 통신 오류
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// `User not found` 메시지를 가진 [`AppError::NotFound`]를 생성합니다.
    pub fn user_not_found() -> Self {
        AppError::NotFound(USER_NOT_FOUND.to_string())
    }

    /// 에러 종류에 해당하는 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::ConstraintViolation(_)
            | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 요청 경로를 붙여 HTTP 응답 가능한 [`RequestError`]로 변환합니다.
    pub fn at(self, path: impl Into<String>) -> RequestError {
        RequestError {
            error: self,
            path: path.into(),
        }
    }
}

impl From<Violations> for AppError {
    fn from(violations: Violations) -> Self {
        AppError::ValidationError(violations)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 요청 경로가 결합된 HTTP 경계 에러
///
/// `actix_web::ResponseError`는 요청 정보를 받지 않으므로,
/// 핸들러가 실패 시점에 경로를 명시적으로 붙여 반환합니다.
#[derive(Error, Debug)]
#[error("{error} ({path})")]
pub struct RequestError {
    error: AppError,
    path: String,
}

impl RequestError {
    pub fn new(error: AppError, path: impl Into<String>) -> Self {
        error.at(path)
    }

    /// 이 에러에 해당하는 구조화된 에러 본문
    pub fn body(&self) -> ErrorResponse {
        ErrorResponse::new(self.status_code(), self.error.to_string(), self.path.clone())
    }
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    /// 모든 에러를 동일한 구조의 JSON 본문으로 변환합니다.
    ///
    /// 5xx 에러는 서버 로그에 원인을 남기되, 응답 형식은 4xx와 동일하게 유지합니다.
    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("{} 처리 중 오류: {}", self.path, self.error);
        }

        HttpResponse::build(self.status_code()).json(self.body())
    }
}

/// 서비스 결과에 요청 경로를 붙이는 확장 trait
pub trait AtPath<T> {
    fn at_path(self, req: &HttpRequest) -> Result<T, RequestError>;
}

impl<T> AtPath<T> for AppResult<T> {
    fn at_path(self, req: &HttpRequest) -> Result<T, RequestError> {
        self.map_err(|e| e.at(req.path()))
    }
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
