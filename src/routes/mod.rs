//! 라우트 및 요청 추출기 설정
//!
//! ```text
//! GET    /health
//! GET    /api/users[?name=]
//! POST   /api/users
//! GET    /api/users/{id}
//! PATCH  /api/users/{id}
//! DELETE /api/users/{id}
//! GET    /, /main, /dates, /hotels
//! ```

use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::core::errors::{AppError, RequestError};
use crate::handlers;
use crate::services::users::UserService;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    configure_extractors(cfg);

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
    configure_page_routes(cfg);
}

/// 추출기 실패(잘못된 JSON, 숫자가 아닌 ID 등)를 구조화된 400 응답으로 변환합니다.
fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(
        |err: error::JsonPayloadError, req: &HttpRequest| bad_request(err.to_string(), req),
    ))
    .app_data(web::PathConfig::default().error_handler(
        |err: error::PathError, req: &HttpRequest| bad_request(err.to_string(), req),
    ))
    .app_data(web::QueryConfig::default().error_handler(
        |err: error::QueryPayloadError, req: &HttpRequest| bad_request(err.to_string(), req),
    ));
}

fn bad_request(message: String, req: &HttpRequest) -> actix_web::Error {
    RequestError::new(AppError::BadRequest(message), req.path()).into()
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

fn configure_page_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::pages::index)
        .service(handlers::pages::main_page)
        .service(handlers::pages::dates)
        .service(handlers::pages::hotels);
}

#[actix_web::get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "avia_scanner_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "store": service.store_backend().as_str(),
        }
    }))
}
