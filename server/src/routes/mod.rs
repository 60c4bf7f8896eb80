use actix_web::{web, HttpResponse};

use errors::ErrorResponse;

pub mod polls;
pub mod questions;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/polls")
            .service(
                web::resource("/")
                    .name("polls_index")
                    .route(web::get().to(polls::index)),
            )
            .service(
                web::resource("/{id}/")
                    .name("polls_detail")
                    .route(web::get().to(polls::detail)),
            ),
    )
    .service(
        web::scope("/api").service(
            web::scope("/questions")
                .route("", web::get().to(questions::get_all))
                .route("", web::post().to(questions::create))
                .route("/{id}", web::get().to(questions::get_one)),
        ),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}
