use actix_web::{
    http::header::ContentType,
    web::{block, Data, Path},
    HttpRequest, HttpResponse,
};
use chrono::Utc;

use db::QuestionStore;
use errors::Error;

use crate::render;

pub async fn detail(
    req: HttpRequest,
    question_id: Path<i32>,
    store: Data<dyn QuestionStore>,
) -> Result<HttpResponse, Error> {
    let question_id = question_id.into_inner();
    let now = Utc::now();

    let question = block(move || store.find_published_by_id(question_id, now)).await??;

    let body = render::detail(&req, &question)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}
