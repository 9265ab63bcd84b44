use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;
use crate::constants::{
    DEFAULT_EXPLORER_API_URL, DEFAULT_EXPLORER_MAX_RETRIES, DEFAULT_EXPLORER_RETRY_DELAY_MS,
    DEFAULT_EXPLORER_TIMEOUT_MS, DEFAULT_SERVER_PORT,
};
use crate::services::explorer::RetryPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub explorer_api_url: String,
    pub explorer_timeout_ms: u64,
    pub explorer_max_retries: u32,
    pub explorer_retry_delay_ms: u64,
    /// CORS origins; empty means any origin is allowed
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_SERVER_PORT,
            explorer_api_url: DEFAULT_EXPLORER_API_URL.to_string(),
            explorer_timeout_ms: DEFAULT_EXPLORER_TIMEOUT_MS,
            explorer_max_retries: DEFAULT_EXPLORER_MAX_RETRIES,
            explorer_retry_delay_ms: DEFAULT_EXPLORER_RETRY_DELAY_MS,
            allowed_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let explorer_api_url = env::var("EXPLORER_API_URL")
            .unwrap_or_else(|_| DEFAULT_EXPLORER_API_URL.to_string());
        if !explorer_api_url.starts_with("http://") && !explorer_api_url.starts_with("https://") {
            return Err(anyhow::anyhow!("EXPLORER_API_URL must be an http(s) URL, got {}", explorer_api_url));
        }

        Ok(Self {
            port: env_or("PORT", DEFAULT_SERVER_PORT),
            explorer_api_url,
            explorer_timeout_ms: env_or("EXPLORER_TIMEOUT_MS", DEFAULT_EXPLORER_TIMEOUT_MS),
            explorer_max_retries: env_or("EXPLORER_MAX_RETRIES", DEFAULT_EXPLORER_MAX_RETRIES),
            explorer_retry_delay_ms: env_or("EXPLORER_RETRY_DELAY_MS", DEFAULT_EXPLORER_RETRY_DELAY_MS),
            allowed_origins: env::var("ALLOWED_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.explorer_max_retries,
            retry_delay: Duration::from_millis(self.explorer_retry_delay_ms),
            timeout: Duration::from_millis(self.explorer_timeout_ms),
        }
    }
}

/// Read and parse an env var, falling back to `default` when unset or unparseable
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Comma separated origin list, blanks dropped
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
