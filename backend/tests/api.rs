use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{Query, State},
    http::{Request, StatusCode},
    routing::get,
};
use cryptoscore::{ExplorerClient, RetryPolicy, create_router};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tower::ServiceExt;

const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f6e842";

type Hits = Arc<AtomicU32>;

async fn spawn_explorer(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

fn policy(max_retries: u32) -> RetryPolicy {
    RetryPolicy {
        max_retries,
        retry_delay: Duration::from_millis(5),
        timeout: Duration::from_millis(500),
    }
}

async fn healthy_explorer(
    State(hits): State<Hits>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    hits.fetch_add(1, Ordering::SeqCst);
    match params.get("action").map(String::as_str) {
        Some("balance") => Json(json!({ "status": "1", "message": "OK", "result": "2500000000000000000" })),
        Some("txlist") => Json(json!({
            "status": "1",
            "message": "OK",
            "result": [
                { "hash": "0x02", "timeStamp": "1700000000", "value": "1000000000000000000" },
                { "hash": "0x01", "timeStamp": "1690000000", "value": "500000000000000000" }
            ]
        })),
        _ => Json(json!({ "status": "0", "message": "No token transfers found", "result": [] })),
    }
}

/// Router under test wired to a well-behaved explorer
async fn app() -> (Router, Hits) {
    let hits: Hits = Arc::new(AtomicU32::new(0));
    let explorer = Router::new()
        .route("/api", get(healthy_explorer))
        .with_state(hits.clone());
    let client = ExplorerClient::new(spawn_explorer(explorer).await, policy(0)).unwrap();
    (create_router(client, &[]), hits)
}

async fn call(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let (app, _) = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("origin", "https://anywhere.example")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_cors_restricted_to_configured_origins() {
    let (_, hits) = app().await;
    let explorer = Router::new().route("/api", get(healthy_explorer)).with_state(hits);
    let client = ExplorerClient::new(spawn_explorer(explorer).await, policy(0)).unwrap();
    let app = create_router(client, &["https://cryptoscore.example".to_string()]);

    let request = |origin: &str| {
        Request::builder()
            .uri("/health")
            .header("origin", origin)
            .body(Body::empty())
            .unwrap()
    };

    let allowed = app.clone().oneshot(request("https://cryptoscore.example")).await.unwrap();
    assert_eq!(
        allowed.headers()["access-control-allow-origin"],
        "https://cryptoscore.example"
    );

    let denied = app.oneshot(request("https://evil.example")).await.unwrap();
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app().await;
    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"OK");
}

#[tokio::test]
async fn test_balance_requires_address_and_network() {
    let (app, hits) = app().await;

    let (status, body) = call(app, "/balance?address=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "0");
    assert_eq!(body["message"], "Address and network are required");
    assert!(body["result"].is_null());
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_balance_returns_raw_wei() {
    let (app, _) = app().await;

    let (status, body) = call(app, &format!("/balance?address={}&network=ethereum", ADDRESS)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "1");
    assert_eq!(body["message"], "OK");
    assert_eq!(body["result"], "2500000000000000000");
}

#[tokio::test]
async fn test_transactions_under_api_prefix() {
    let (app, _) = app().await;

    let (status, body) = call(app, &format!("/api/transactions?address={}", ADDRESS)).await;

    assert_eq!(status, StatusCode::OK);
    let result = &body["result"];
    assert_eq!(result["totalTransactions"], 2);
    assert_eq!(result["lastActivity"], 1_700_000_000);
    assert_eq!(result["firstActivity"], 1_690_000_000);
    assert_eq!(result["transactions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_token_holders_survive_upstream_failure() {
    let explorer = Router::new().route("/api", get(|| async { StatusCode::BAD_GATEWAY }));
    let client = ExplorerClient::new(spawn_explorer(explorer).await, policy(0)).unwrap();

    let (status, body) = call(create_router(client, &[]), &format!("/token-holders?address={}", ADDRESS)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "1");
    assert!(body.get("message").is_none());
    assert_eq!(body["result"]["address"], ADDRESS);
    assert!(body["result"]["transactions"].as_array().unwrap().is_empty());
    assert!(body["result"]["tokenStats"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_analyze_unsupported_network() {
    let (app, hits) = app().await;

    let (status, body) = call(app, "/analyze?address=1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa&network=bitcoin").await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["status"], "0");
    assert!(body["message"].as_str().unwrap().contains("coming soon"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_analyze_invalid_address() {
    let (app, _) = app().await;

    let (status, body) = call(app, "/api/analyze?address=0x1234&network=ethereum").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid address format for selected network");
}

#[tokio::test]
async fn test_analyze_report() {
    let (app, hits) = app().await;

    let (status, body) = call(app, &format!("/analyze?address={}&network=ethereum", ADDRESS)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.load(Ordering::SeqCst), 3);

    let report = &body["result"];
    assert_eq!(report["balance"]["formattedValue"], "2.5");
    assert_eq!(report["totalTransactions"], 2);
    assert_eq!(report["lastActivityDisplay"], "November 14, 2023 at 10:13 PM UTC");
    // 10 (balance) + 0 (transactions) + 10 (about 115 days)
    assert_eq!(report["creditScore"]["score"], 20);
    assert_eq!(report["creditScore"]["riskTier"], "High");
    assert_eq!(
        report["creditScore"]["recommendations"],
        json!(["Increase transaction activity to improve credit score"])
    );
}

#[tokio::test]
async fn test_rate_limit_exhaustion_maps_to_429() {
    let hits: Hits = Arc::new(AtomicU32::new(0));
    let explorer = Router::new()
        .route(
            "/api",
            get(|State(hits): State<Hits>| async move {
                hits.fetch_add(1, Ordering::SeqCst);
                StatusCode::TOO_MANY_REQUESTS
            }),
        )
        .with_state(hits.clone());
    let client = ExplorerClient::new(spawn_explorer(explorer).await, policy(2)).unwrap();

    let (status, body) = call(create_router(client, &[]), &format!("/balance?address={}&network=ethereum", ADDRESS)).await;

    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["status"], "0");
    assert_eq!(hits.load(Ordering::SeqCst), 3);
}
