use std::env;
use std::time::Duration;

/// Endpoint paths on the events/payments backend.
pub const ACTIVE_EVENT_PATH: &str = "/api/events/event/get/active";
pub const CHECKOUT_PATH: &str = "/api/payments/checkout";
pub const SESSION_STATUS_PATH: &str = "/api/payments/session";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeout_secs = env::var("API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            api_base_url,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}
