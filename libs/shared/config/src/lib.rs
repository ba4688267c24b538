use std::env;
use tracing::warn;

pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/suyogshiftcare/jsontest/main/available.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub availability_feed_url: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            availability_feed_url: env::var("AVAILABILITY_FEED_URL").unwrap_or_else(|_| {
                warn!("AVAILABILITY_FEED_URL not set, using public feed");
                DEFAULT_FEED_URL.to_string()
            }),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| {
                warn!("BIND_ADDR not set, using default");
                "0.0.0.0:3000".to_string()
            }),
        }
    }
}
