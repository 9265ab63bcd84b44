use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::handlers::{self, AppState};

pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let api = Router::new()
        .route("/balance", get(handlers::get_balance))
        .route("/transactions", get(handlers::get_transactions))
        .route("/token-holders", get(handlers::get_token_holders))
        .route("/analyze", get(handlers::analyze_address));

    Router::new()
        .route("/health", get(health_check))
        .merge(api.clone())
        // Paths used by the original web front end
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .with_state(state)
}

/// Read-only API: GET and preflight only. No configured origin that parses
/// as a header value means any origin is accepted.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring unusable CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}

async fn health_check() -> &'static str {
    "OK"
}
