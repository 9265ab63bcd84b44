use reqwest::{Client, StatusCode, header::ACCEPT};
use serde_json::Value;
use std::future::Future;
use tokio::time::{Duration, sleep};
use tracing::{debug, warn};

use crate::constants::*;
use crate::error::ExplorerError;
use crate::models::ExplorerResponse;
use crate::utils::Config;

/// How a single explorer call is bounded: per-attempt timeout plus a fixed
/// delay between at most `max_retries` retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub retry_delay: Duration,
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_EXPLORER_MAX_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_EXPLORER_RETRY_DELAY_MS),
            timeout: Duration::from_millis(DEFAULT_EXPLORER_TIMEOUT_MS),
        }
    }
}

/// Runs `operation` until it succeeds, fails with a non-retryable error, or
/// the retry budget is spent. Makes at most `max_retries + 1` attempts and
/// sleeps exactly `retry_delay` between them.
pub async fn retry_fixed_delay<F, Fut, T>(
    policy: &RetryPolicy,
    operation_name: &str,
    mut operation: F,
) -> Result<T, ExplorerError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ExplorerError>>,
{
    let mut retries_left = policy.max_retries;

    loop {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(e) if e.is_retryable() && retries_left > 0 => {
                warn!(
                    "{}: {}, retrying in {}ms... ({} retries left)",
                    operation_name,
                    e,
                    policy.retry_delay.as_millis(),
                    retries_left
                );
                sleep(policy.retry_delay).await;
                retries_left -= 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Thin client over the block explorer's `module/action` REST API
#[derive(Debug, Clone)]
pub struct ExplorerClient {
    client: Client,
    base_url: String,
    policy: RetryPolicy,
}

impl ExplorerClient {
    pub fn new(base_url: impl Into<String>, policy: RetryPolicy) -> Result<Self, ExplorerError> {
        let client = Client::builder()
            .user_agent(EXPLORER_USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            policy,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(config.explorer_api_url.clone(), config.retry_policy())
            .map_err(|e| anyhow::anyhow!("Failed to build explorer client: {}", e))
    }

    /// GET the explorer with `params`, retrying rate limits and timeouts.
    /// The payload is returned as-is; its `status` field is not checked here.
    pub async fn fetch(&self, params: &[(&str, String)]) -> Result<ExplorerResponse<Value>, ExplorerError> {
        let action = params
            .iter()
            .find(|(key, _)| *key == "action")
            .map(|(_, value)| value.as_str())
            .unwrap_or("request");

        retry_fixed_delay(&self.policy, action, || self.fetch_once(params)).await
    }

    async fn fetch_once(&self, params: &[(&str, String)]) -> Result<ExplorerResponse<Value>, ExplorerError> {
        debug!("Explorer request to {} with {:?}", self.base_url, params);

        let response = self
            .client
            .get(&self.base_url)
            .query(params)
            .header(ACCEPT, "application/json")
            .timeout(self.policy.timeout)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ExplorerError::RateLimited);
        }
        if status.as_u16() == HTTP_STATUS_GATEWAY_TIMEOUT_CLOUDFLARE {
            return Err(ExplorerError::GatewayTimeout);
        }
        if !status.is_success() {
            return Err(ExplorerError::Status(status));
        }

        Ok(response.json::<ExplorerResponse<Value>>().await?)
    }
}

/// Params shared by every per-address account query
pub(crate) fn account_params(action: &str, address: &str) -> Vec<(&'static str, String)> {
    vec![
        ("module", "account".to_string()),
        ("action", action.to_string()),
        ("address", address.to_string()),
    ]
}
