use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "http://www.shopping.com";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        host: get_env_or_default("SHOPGRID_HOST", DEFAULT_HOST),
        user_agent: get_env_or_default(
            "SHOPGRID_USER_AGENT",
            concat!("shopgrid/", env!("CARGO_PKG_VERSION")),
        ),
        timeout: Duration::from_secs(
            env::var("SHOPGRID_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        ),
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub user_agent: String,
    pub timeout: Duration,
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
