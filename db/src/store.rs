use std::sync::RwLock;

use chrono::{DateTime, Utc};

use errors::Error;

use crate::models::{NewQuestion, Question, QUESTION_NOT_FOUND};
use crate::{get_conn, PgPool};

/// Storage for questions. Calls are blocking, so handlers run them inside
/// `web::block`.
pub trait QuestionStore: Send + Sync {
    fn create(&self, new_question: NewQuestion) -> Result<Question, Error>;

    /// Every question with `pub_date <= now`, newest first, ties by id descending.
    fn find_published(&self, now: DateTime<Utc>) -> Result<Vec<Question>, Error>;

    fn find_published_by_id(&self, id: i32, now: DateTime<Utc>) -> Result<Question, Error>;
}

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        PgStore { pool }
    }
}

impl QuestionStore for PgStore {
    fn create(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let conn = get_conn(&self.pool)?;
        Question::create(&conn, new_question)
    }

    fn find_published(&self, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        let conn = get_conn(&self.pool)?;
        Question::find_published(&conn, now)
    }

    fn find_published_by_id(&self, id: i32, now: DateTime<Utc>) -> Result<Question, Error> {
        let conn = get_conn(&self.pool)?;
        Question::find_published_by_id(&conn, id, now)
    }
}

#[derive(Default)]
struct MemoryState {
    questions: Vec<Question>,
    last_id: i32,
}

/// Keeps questions in process memory. Used when no database is configured,
/// and by the http tests.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

fn poisoned<T>(_: T) -> Error {
    error!("Question store lock was poisoned");
    Error::InternalServerError("Question store unavailable".into())
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl QuestionStore for MemoryStore {
    fn create(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id = state.last_id.checked_add(1).ok_or_else(|| {
            error!("Question ids are exhausted");
            Error::InternalServerError("No question ids left".into())
        })?;

        let question = Question {
            id: state.last_id,
            question_text: new_question.question_text,
            pub_date: new_question.pub_date,
        };
        state.questions.push(question.clone());

        Ok(question)
    }

    fn find_published(&self, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        let state = self.state.read().map_err(poisoned)?;

        let mut results: Vec<Question> = state
            .questions
            .iter()
            .filter(|question| question.is_published_at(now))
            .cloned()
            .collect();
        results.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));

        Ok(results)
    }

    fn find_published_by_id(&self, id: i32, now: DateTime<Utc>) -> Result<Question, Error> {
        let state = self.state.read().map_err(poisoned)?;

        state
            .questions
            .iter()
            .find(|question| question.id == id && question.is_published_at(now))
            .cloned()
            .ok_or_else(|| Error::NotFound(QUESTION_NOT_FOUND.to_string()))
    }
}
