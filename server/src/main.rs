#[macro_use]
extern crate log;

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{
    http::header,
    middleware::Logger,
    web::{self, Data},
    App, HttpServer,
};
use dotenv::dotenv;
use env_logger::Env;

use db::{new_pool, MemoryStore, PgStore, QuestionStore};

mod config;
mod render;
mod routes;
mod tests;
mod validate;

use crate::config::Config;
use crate::routes::{not_found, routes};

fn build_store(config: &Config) -> io::Result<Arc<dyn QuestionStore>> {
    match config.database_url {
        Some(ref database_url) => {
            let pool = new_pool(database_url)
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
            Ok(Arc::new(PgStore::new(pool)))
        }
        None => {
            warn!("DATABASE_URL is not set, questions will only be kept in memory");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

fn cors(client_host: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    match client_host {
        Some(host) => cors.allowed_origin(host),
        None => cors,
    }
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let store = build_store(&config)?;
    let bind_address = config.bind_address.clone();

    info!("Starting polls server on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(cors(config.client_host.as_deref()))
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .app_data(Data::from(store.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(bind_address)?
    .run()
    .await
}
