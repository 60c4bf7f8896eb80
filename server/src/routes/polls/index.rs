use actix_web::{
    http::header::ContentType,
    web::{block, Data},
    HttpRequest, HttpResponse,
};
use chrono::Utc;

use db::QuestionStore;
use errors::Error;

use crate::render;

pub async fn index(req: HttpRequest, store: Data<dyn QuestionStore>) -> Result<HttpResponse, Error> {
    let now = Utc::now();
    let latest_question_list = block(move || store.find_published(now)).await??;

    let body = render::index(&req, &latest_question_list)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
