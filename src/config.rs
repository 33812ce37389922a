use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        backend_url: get_env("BACKEND_URL"),
        backend_timeout_ms: get_env_parsed("BACKEND_TIMEOUT_MS", 5000),
        max_results_cap: get_env_parsed("MAX_RESULTS_CAP", 100),
        page_size_cap: get_env_parsed("PAGE_SIZE_CAP", 50),
    }
});

pub struct Config {
    /// Base URL of the ranking/index backend, e.g. "http://localhost:9200".
    pub backend_url: String,
    /// Timeout applied to each backend call, in milliseconds.
    pub backend_timeout_ms: u64,
    /// Upper bound for the `max` query parameter.
    pub max_results_cap: u32,
    /// Upper bound for the `pageResults` query parameter.
    pub page_size_cap: u32,
}

fn get_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("Missing required environment variable: {key}"))
}

fn get_env_parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
