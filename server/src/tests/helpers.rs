#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_web::{
        test,
        web::{self, Bytes, Data},
        App,
    };
    use chrono::{Duration, Utc};
    use serde::{de::DeserializeOwned, Serialize};
    use serde_json;

    use db::{
        models::{NewQuestion, Question},
        MemoryStore, QuestionStore,
    };

    use crate::routes::{not_found, routes};

    pub fn get_store() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new())
    }

    /// Create a question published `days` from now (negative for the past).
    pub fn create_question(store: &MemoryStore, question_text: &str, days: i64) -> Question {
        let pub_date = Utc::now() + Duration::days(days);
        store
            .create(NewQuestion::new(question_text.to_string(), pub_date))
            .unwrap()
    }

    async fn call(store: &Arc<MemoryStore>, req: test::TestRequest) -> (u16, Bytes) {
        let store: Arc<dyn QuestionStore> = store.clone();
        let app = test::init_service(
            App::new()
                .app_data(Data::from(store))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;

        (status, body)
    }

    fn parse_json<R>(body: Bytes, status: u16) -> R
    where
        R: DeserializeOwned,
    {
        serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        })
    }

    /// Helper for HTTP GET integration tests of html pages
    pub async fn test_get_page(store: &Arc<MemoryStore>, route: &str) -> (u16, String) {
        let (status, body) = call(store, test::TestRequest::get().uri(route)).await;
        let page = String::from_utf8(body.to_vec()).expect("response was not utf-8");

        (status, page)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(store: &Arc<MemoryStore>, route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let (status, body) = call(store, test::TestRequest::get().uri(route)).await;

        (status, parse_json(body, status))
    }

    /// Helper for HTTP POST integration tests
    pub async fn test_post<T: Serialize, R>(
        store: &Arc<MemoryStore>,
        route: &str,
        params: T,
    ) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let req = test::TestRequest::post().set_json(&params).uri(route);
        let (status, body) = call(store, req).await;

        (status, parse_json(body, status))
    }
}
