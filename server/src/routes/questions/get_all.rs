use actix_web::web::{block, Data, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{models::QuestionDetails, QuestionStore};
use errors::Error;

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<QuestionDetails>,
}

pub async fn get_all(store: Data<dyn QuestionStore>) -> Result<Json<IndexResponse>, Error> {
    let now = Utc::now();
    let questions = block(move || store.find_published(now)).await??;

    Ok(Json(IndexResponse {
        latest_question_list: questions.iter().map(|q| q.details_at(now)).collect(),
    }))
}
