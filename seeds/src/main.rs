#[macro_use]
extern crate log;

use std::env;
use std::process;

use chrono::{Duration, Utc};
use dotenv::dotenv;
use env_logger::Env;

use db::{models::NewQuestion, new_pool, PgStore, QuestionStore};

fn main() {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            error!("DATABASE_URL must be set");
            process::exit(1);
        }
    };

    let store = match new_pool(&database_url) {
        Ok(pool) => PgStore::new(pool),
        Err(err) => {
            error!("Could not connect to the database - {}", err);
            process::exit(1);
        }
    };

    let now = Utc::now();
    for (question_text, offset) in &[
        ("What's new?", Duration::hours(-2)),
        ("What's your favourite colour?", Duration::days(-3)),
        ("Tabs or spaces?", Duration::days(-30)),
        ("What will we ask next week?", Duration::days(7)),
    ] {
        match store.create(NewQuestion::new(question_text.to_string(), now + *offset)) {
            Ok(question) => info!("Seeded question {} - {}", question.id, question.question_text),
            Err(err) => {
                error!("Could not seed \"{}\" - {}", question_text, err);
                process::exit(1);
            }
        }
    }
}
