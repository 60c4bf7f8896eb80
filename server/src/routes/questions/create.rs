use actix_web::web::{block, Data, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use db::{
    models::{NewQuestion, QuestionDetails},
    QuestionStore,
};
use errors::Error;

use crate::validate::validate;

#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "question_text must be between 1 and 200 characters"
    ))]
    question_text: String,
    pub_date: Option<DateTime<Utc>>,
}

pub async fn create(
    store: Data<dyn QuestionStore>,
    params: Json<CreateQuestionRequest>,
) -> Result<Json<QuestionDetails>, Error> {
    validate(&params)?;

    let params = params.into_inner();
    let now = Utc::now();
    let new_question = NewQuestion::new(params.question_text, params.pub_date.unwrap_or(now));

    let question = block(move || store.create(new_question)).await??;
    info!("Created question {}", question.id);

    Ok(Json(question.details_at(now)))
}
