//! 정적 페이지 라우트
//!
//! 템플릿 렌더링은 프론트엔드가 담당하며, 서버는 페이지 식별자만 반환합니다.

use actix_web::{get, HttpResponse};

fn page(name: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(name)
}

#[get("/")]
pub async fn index() -> HttpResponse {
    page("main")
}

#[get("/main")]
pub async fn main_page() -> HttpResponse {
    page("main")
}

#[get("/dates")]
pub async fn dates() -> HttpResponse {
    page("dates")
}

#[get("/hotels")]
pub async fn hotels() -> HttpResponse {
    page("hotels")
}
