use chrono::{DateTime, Duration, Utc};
use diesel::pg::Pg;
use diesel::{self, ExpressionMethods, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};

use errors::Error;

use crate::schema::questions::{self, table};

pub const QUESTION_NOT_FOUND: &str = "No Question matches the given query.";

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Clone, Debug, Insertable)]
#[table_name = "questions"]
pub struct NewQuestion {
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

/// What the API hands back for a question, including the computed
/// `was_published_recently` flag.
#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct QuestionDetails {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
    pub was_published_recently: bool,
}

impl NewQuestion {
    pub fn new(question_text: String, pub_date: DateTime<Utc>) -> Self {
        NewQuestion {
            question_text,
            pub_date,
        }
    }
}

fn published_query(now: DateTime<Utc>) -> questions::BoxedQuery<'static, Pg> {
    use questions::dsl::{id, pub_date, questions as questions_table};

    questions_table
        .filter(pub_date.le(now))
        .order((pub_date.desc(), id.desc()))
        .into_boxed()
}

fn published_by_id_query(question_id: i32, now: DateTime<Utc>) -> questions::BoxedQuery<'static, Pg> {
    published_query(now).filter(questions::dsl::id.eq(question_id))
}

impl Question {
    pub fn create(conn: &PgConnection, new_question: NewQuestion) -> Result<Question, Error> {
        let question = diesel::insert_into(table)
            .values(new_question)
            .get_result(conn)?;

        Ok(question)
    }

    /// Questions visible at `now`, most recently published first.
    pub fn find_published(conn: &PgConnection, now: DateTime<Utc>) -> Result<Vec<Question>, Error> {
        let results = published_query(now).load::<Question>(conn)?;

        Ok(results)
    }

    /// A future question is reported exactly like a missing one.
    pub fn find_published_by_id(
        conn: &PgConnection,
        question_id: i32,
        now: DateTime<Utc>,
    ) -> Result<Question, Error> {
        published_by_id_query(question_id, now)
            .first::<Question>(conn)
            .map_err(|err| match err {
                diesel::result::Error::NotFound => Error::NotFound(QUESTION_NOT_FOUND.to_string()),
                err => err.into(),
            })
    }

    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    /// True when `pub_date` falls in `(now - 1 day, now]`.
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) < self.pub_date && self.is_published_at(now)
    }

    pub fn details_at(&self, now: DateTime<Utc>) -> QuestionDetails {
        QuestionDetails {
            id: self.id,
            question_text: self.question_text.clone(),
            pub_date: self.pub_date,
            was_published_recently: self.was_published_recently_at(now),
        }
    }
}
