use std::env;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub bind_address: String,
    pub database_url: Option<String>,
    pub client_host: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Config {
            bind_address: read("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            database_url: read("DATABASE_URL"),
            client_host: read("CLIENT_HOST"),
        }
    }
}
