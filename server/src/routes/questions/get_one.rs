use actix_web::web::{block, Data, Json, Path};
use chrono::Utc;

use db::{models::QuestionDetails, QuestionStore};
use errors::Error;

pub async fn get_one(
    question_id: Path<i32>,
    store: Data<dyn QuestionStore>,
) -> Result<Json<QuestionDetails>, Error> {
    let question_id = question_id.into_inner();
    let now = Utc::now();

    let question = block(move || store.find_published_by_id(question_id, now)).await??;

    Ok(Json(question.details_at(now)))
}

#[cfg(test)]
mod tests {
    use db::models::{QuestionDetails, QUESTION_NOT_FOUND};
    use errors::ErrorResponse;

    use crate::tests::helpers::tests::{create_question, get_store, test_get};

    #[actix_rt::test]
    async fn test_get_past_question() {
        let store = get_store();
        let question = create_question(&store, "Past question", -5);

        let res: (u16, QuestionDetails) =
            test_get(&store, &format!("/api/questions/{}", question.id)).await;
        assert_eq!(res.0, 200);
        assert_eq!(res.1.id, question.id);
        assert_eq!(res.1.question_text, "Past question");
        assert!(!res.1.was_published_recently);
    }

    #[actix_rt::test]
    async fn test_get_recent_question() {
        let store = get_store();
        let question = create_question(&store, "Recent question", 0);

        let res: (u16, QuestionDetails) =
            test_get(&store, &format!("/api/questions/{}", question.id)).await;
        assert_eq!(res.0, 200);
        assert!(res.1.was_published_recently);
    }

    #[actix_rt::test]
    async fn test_get_future_question() {
        let store = get_store();
        let question = create_question(&store, "Future question", 5);

        let res: (u16, ErrorResponse) =
            test_get(&store, &format!("/api/questions/{}", question.id)).await;
        assert_eq!(res.0, 404);
        assert_eq!(res.1.errors[0], QUESTION_NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_get_missing_question() {
        let store = get_store();

        let res: (u16, ErrorResponse) = test_get(&store, "/api/questions/7").await;
        assert_eq!(res.0, 404);
        assert_eq!(res.1.errors[0], QUESTION_NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_unknown_route() {
        let store = get_store();

        let res: (u16, ErrorResponse) = test_get(&store, "/api/answers").await;
        assert_eq!(res.0, 404);
        assert_eq!(res.1.errors[0], "Not Found");
    }
}
