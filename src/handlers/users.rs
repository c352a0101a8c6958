//! 사용자 CRUD 핸들러
//!
//! 모든 실패는 요청 경로가 포함된 구조화된 에러 본문으로 응답합니다.

use actix_web::{delete, get, patch, post, web, HttpRequest, HttpResponse};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::errors::{AtPath, RequestError};
use crate::domain::dto::users::request::{parse_create_body, parse_patch_body};
use crate::domain::dto::users::response::{UserResponse, USER_DELETED};
use crate::domain::entities::users::UserId;
use crate::services::users::UserService;

#[derive(Debug, Deserialize)]
pub struct UserQuery {
    /// 이름이 정확히 일치하는 사용자만 조회
    pub name: Option<String>,
}

#[get("")]
pub async fn list_users(
    req: HttpRequest,
    service: web::Data<UserService>,
    query: web::Query<UserQuery>,
) -> Result<HttpResponse, RequestError> {
    let users = service
        .list_users(query.name.as_deref())
        .await
        .at_path(&req)?;

    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[post("")]
pub async fn create_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, RequestError> {
    let created = service
        .create_user(parse_create_body(&payload))
        .await
        .at_path(&req)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(created)))
}

#[get("/{user_id}")]
pub async fn get_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, RequestError> {
    let user = service.get_user(*user_id).await.at_path(&req)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 부분 갱신 (`birthDate` 포함 여부에 따라 엄격한 본문 또는 key/value 맵으로 해석)
#[patch("/{user_id}")]
pub async fn update_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    user_id: web::Path<UserId>,
    payload: web::Json<Map<String, Value>>,
) -> Result<HttpResponse, RequestError> {
    let change = parse_patch_body(&payload).at_path(&req)?;
    let updated = service
        .update_user(*user_id, change)
        .await
        .at_path(&req)?;

    Ok(HttpResponse::Ok().json(UserResponse::from(updated)))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    req: HttpRequest,
    service: web::Data<UserService>,
    user_id: web::Path<UserId>,
) -> Result<HttpResponse, RequestError> {
    service.delete_user(*user_id).await.at_path(&req)?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(USER_DELETED))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::json;

    use super::*;
    use crate::domain::dto::ErrorResponse;
    use crate::repositories::users::InMemoryUserStore;
    use crate::routes::configure_all_routes;

    fn user_service() -> web::Data<UserService> {
        web::Data::new(UserService::new(Arc::new(InMemoryUserStore::new())))
    }

    fn valid_user() -> Value {
        json!({
            "name": "Test_User",
            "email": "test1@example.com",
            "phone": "+79609062424",
            "location": "Test_Location",
            "birthDate": "01.01.1990",
        })
    }

    macro_rules! init_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(user_service())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_then_get_user() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(valid_user())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["id"], 1);
        assert_eq!(created["birthDate"], "01.01.1990");

        let req = test::TestRequest::get().uri("/api/users/1").to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_create_ignores_client_id() {
        let app = init_app!();
        let mut body = valid_user();
        body["id"] = json!(42);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(body)
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(created["id"], 1);
    }

    #[actix_web::test]
    async fn test_create_invalid_user_is_bad_request() {
        let app = init_app!();
        let mut body = valid_user();
        body["phone"] = json!("9609062424");

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.status, 400);
        assert_eq!(error.path, "/api/users");
        assert!(error.message.starts_with("Validation failed"));
        assert!(error.message.contains("phone: incorrect phone number"));
    }

    #[actix_web::test]
    async fn test_create_reports_type_errors_with_rule_errors() {
        let app = init_app!();

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(json!({
                "name": 5,
                "email": "broken",
                "phone": "123",
                "location": "",
                "birthDate": "01.01.1990",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            error.message,
            "Validation failed: name: must be a string; \
             email: must be a well-formed email address; \
             phone: incorrect phone number; location: must not be empty"
        );
    }

    #[actix_web::test]
    async fn test_create_malformed_birth_date_is_field_error() {
        let app = init_app!();
        let mut body = valid_user();
        body["birthDate"] = json!("1990-01-01");

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            error.message,
            "Validation failed: birthDate: must be a date in dd.MM.yyyy format"
        );
    }

    #[actix_web::test]
    async fn test_create_duplicate_email_is_bad_request() {
        let app = init_app!();
        for expected in [StatusCode::OK, StatusCode::BAD_REQUEST] {
            let req = test::TestRequest::post()
                .uri("/api/users")
                .set_json(valid_user())
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_missing_user_returns_not_found_with_path() {
        let app = init_app!();

        let requests = [
            test::TestRequest::get().uri("/api/users/100"),
            test::TestRequest::patch()
                .uri("/api/users/100")
                .set_json(json!({ "name": "B" })),
            test::TestRequest::delete().uri("/api/users/100"),
        ];

        for req in requests {
            let resp = test::call_service(&app, req.to_request()).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);

            let error: ErrorResponse = test::read_body_json(resp).await;
            assert_eq!(error.error, "Not Found");
            assert_eq!(error.message, "User not found");
            assert_eq!(error.path, "/api/users/100");
        }
    }

    #[actix_web::test]
    async fn test_patch_map_updates_only_supplied_fields() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(valid_user())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::patch()
            .uri("/api/users/1")
            .set_json(json!({ "name": "Updated_User", "nickname": "ignored" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(updated["name"], "Updated_User");
        assert_eq!(updated["email"], "test1@example.com");
        assert_eq!(updated["birthDate"], "01.01.1990");
    }

    #[actix_web::test]
    async fn test_patch_typed_body_updates_birth_date() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(valid_user())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::patch()
            .uri("/api/users/1")
            .set_json(json!({ "birthDate": "15.06.1985" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["birthDate"], "15.06.1985");

        let req = test::TestRequest::patch()
            .uri("/api/users/1")
            .set_json(json!({ "birthDate": "01.01.2999" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_patch_reports_every_invalid_field() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(valid_user())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::patch()
            .uri("/api/users/1")
            .set_json(json!({ "name": 5, "email": "broken", "phone": "123" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            error.message,
            "Validation failed: name: must be a string; \
             email: must be a well-formed email address; phone: incorrect phone number"
        );

        let req = test::TestRequest::get().uri("/api/users/1").to_request();
        let unchanged: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(unchanged["name"], "Test_User");
    }

    #[actix_web::test]
    async fn test_patch_strict_body_reports_type_errors() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(valid_user())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::patch()
            .uri("/api/users/1")
            .set_json(json!({ "name": 5, "birthDate": "1985/06/15" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(
            error.message,
            "Validation failed: name: must be a string; \
             birthDate: must be a date in dd.MM.yyyy format"
        );
    }

    #[actix_web::test]
    async fn test_patch_null_field_is_rejected() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(valid_user())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::patch()
            .uri("/api/users/1")
            .set_json(json!({ "location": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_user() {
        let app = init_app!();
        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(valid_user())
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri("/api/users/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, USER_DELETED.as_bytes());

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let users: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert!(users.is_empty());
    }

    #[actix_web::test]
    async fn test_list_users_with_name_filter() {
        let app = init_app!();
        let mut other = valid_user();
        other["name"] = json!("Olga");
        other["email"] = json!("olga@example.com");

        for body in [valid_user(), other] {
            let req = test::TestRequest::post()
                .uri("/api/users")
                .set_json(body)
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/api/users").to_request();
        let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.len(), 2);

        let req = test::TestRequest::get()
            .uri("/api/users?name=Olga")
            .to_request();
        let filtered: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["email"], "olga@example.com");
    }

    #[actix_web::test]
    async fn test_malformed_requests_use_error_body() {
        let app = init_app!();

        let req = test::TestRequest::get().uri("/api/users/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.path, "/api/users/abc");

        let req = test::TestRequest::post()
            .uri("/api/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.error, "Bad Request");
    }
}
