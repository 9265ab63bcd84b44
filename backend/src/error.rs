use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::constants::{COMING_SOON_MESSAGE, HTTP_STATUS_GATEWAY_TIMEOUT_CLOUDFLARE};

/// Failures of a single explorer API call, before any mapping to the HTTP surface.
#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("explorer rate limited the request (HTTP 429)")]
    RateLimited,

    #[error("explorer gateway timed out (HTTP 524)")]
    GatewayTimeout,

    #[error("explorer request timed out")]
    Timeout,

    #[error("explorer returned HTTP {0}")]
    Status(StatusCode),

    #[error("explorer request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("malformed explorer response: {0}")]
    MalformedResponse(String),
}

impl ExplorerError {
    /// Rate limits and timeouts are worth another attempt; nothing else is.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ExplorerError::RateLimited | ExplorerError::GatewayTimeout | ExplorerError::Timeout
        )
    }
}

impl From<reqwest::Error> for ExplorerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ExplorerError::Timeout
        } else if err.is_decode() {
            ExplorerError::MalformedResponse(err.to_string())
        } else {
            ExplorerError::Request(err)
        }
    }
}

/// Errors surfaced to callers of the analysis services and HTTP handlers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("{0}")]
    MissingParameter(String),

    #[error("Invalid address format for selected network")]
    InvalidAddress,

    #[error("{}", COMING_SOON_MESSAGE)]
    UnsupportedNetwork(String),

    #[error("{0}")]
    NoData(String),

    #[error("Rate limit exceeded - please try again in a few minutes")]
    RateLimited,

    #[error("Request timeout - server took too long to respond")]
    Timeout,

    #[error("Gateway timeout - please try again")]
    GatewayTimeout,

    #[error("{0}")]
    Upstream(String),
}

impl AppError {
    /// Map an explorer failure that survived the retry budget. Exhausted
    /// rate limits and timeouts keep their kind; everything else becomes a
    /// generic upstream failure carrying `fallback`.
    pub fn from_explorer(err: ExplorerError, fallback: &str) -> Self {
        match err {
            ExplorerError::RateLimited => AppError::RateLimited,
            ExplorerError::Timeout => AppError::Timeout,
            ExplorerError::GatewayTimeout => AppError::GatewayTimeout,
            other => {
                tracing::error!("{}: {}", fallback, other);
                AppError::Upstream(fallback.to_string())
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingParameter(_) | AppError::InvalidAddress => StatusCode::BAD_REQUEST,
            AppError::UnsupportedNetwork(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::NoData(_) => StatusCode::NOT_FOUND,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::GatewayTimeout => StatusCode::from_u16(HTTP_STATUS_GATEWAY_TIMEOUT_CLOUDFLARE)
                .unwrap_or(StatusCode::GATEWAY_TIMEOUT),
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether a "try again" restart of the analysis is offered.
    /// Unsupported networks are terminal.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, AppError::UnsupportedNetwork(_))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (
            status,
            Json(json!({
                "status": "0",
                "message": self.to_string(),
                "result": null,
            })),
        )
            .into_response()
    }
}
