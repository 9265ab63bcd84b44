use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{AddressQuery, AnalysisReport, AnalysisStage, Network};
use crate::services::{balance, explorer::ExplorerClient, nft, scoring, transactions};
use crate::utils::time_format::format_epoch;
use crate::utils::wei_conversion::ether_to_f64;

/// Check a query before any upstream call is made.
///
/// Order matters: a missing parameter beats an unsupported network, which
/// beats a malformed address.
pub fn validate_query(query: &AddressQuery) -> Result<Network, AppError> {
    if query.address.is_empty() || query.network.is_empty() {
        return Err(AppError::MissingParameter("Address and network are required".to_string()));
    }

    let network = match query.network.parse::<Network>() {
        Ok(network) if network.is_supported() => network,
        _ => return Err(AppError::UnsupportedNetwork(query.network.clone())),
    };

    if !network.is_valid_address(&query.address) {
        return Err(AppError::InvalidAddress);
    }

    Ok(network)
}

/// Timestamps handed to the scorer. An unreadable timestamp at either end
/// means no measurable account age, so the age factor scores 0.
fn activity_span(first_activity: Option<i64>, last_activity: Option<i64>) -> (i64, i64) {
    match (first_activity, last_activity) {
        (Some(first), Some(last)) => (first, last),
        _ => (0, 0),
    }
}

/// Runs the full lookup: balance, transactions and NFTs, then the score.
#[derive(Debug, Clone)]
pub struct AddressAnalyzer {
    client: ExplorerClient,
}

impl AddressAnalyzer {
    pub fn new(client: ExplorerClient) -> Self {
        Self { client }
    }

    pub async fn analyze(&self, query: &AddressQuery) -> Result<AnalysisReport, AppError> {
        let network = validate_query(query)?;
        let address = query.address.as_str();

        info!("Analyzing {} on {}", address, network);

        // None of the three depend on each other; only balance and
        // transactions are required for a result.
        let (balance, summary, nft) = tokio::join!(
            balance::get_balance(&self.client, address, network.as_str()),
            transactions::get_transactions(&self.client, address),
            nft::get_nft_transactions(&self.client, address),
        );

        let balance = balance::to_balance_result(balance?)?;
        let summary = summary?;
        let nft = nft.unwrap_or_else(|e| {
            warn!("Ignoring NFT lookup failure for {}: {}", address, e);
            crate::models::NftActivity::empty(address)
        });

        let (first_activity, last_activity) = activity_span(summary.first_activity, summary.last_activity);
        let credit_score = scoring::score(
            ether_to_f64(&balance.formatted_value),
            summary.total_transactions as u64,
            first_activity,
            last_activity,
        );

        info!(
            "Scored {}: {} ({} risk, {} recommendations)",
            address,
            credit_score.score,
            credit_score.risk_tier.as_str(),
            credit_score.recommendations.len()
        );

        Ok(AnalysisReport {
            address: address.to_string(),
            network: network.to_string(),
            balance,
            total_transactions: summary.total_transactions,
            first_activity: summary.first_activity,
            last_activity: summary.last_activity,
            first_activity_display: format_epoch(summary.first_activity),
            last_activity_display: format_epoch(summary.last_activity),
            total_volume: summary.total_volume,
            recent_transactions: summary.transactions,
            credit_score,
            nft,
        })
    }

    /// Drive `stage` through one lookup: start, analyze, finish.
    /// Returns the stage unchanged if a lookup cannot start from it.
    pub async fn run(&self, stage: &AnalysisStage, query: AddressQuery) -> AnalysisStage {
        let loading = match stage.start(query.clone()) {
            Ok(loading) => loading,
            Err(e) => {
                warn!("{}", e);
                return stage.clone();
            }
        };

        let outcome = self.analyze(&query).await;
        loading.finish(outcome).unwrap_or(loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::explorer::test_support::*;
    use axum::{Json, Router, extract::{Query, State}, http::StatusCode, routing::get};
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc9e7595f6e842";

    type Hits = Arc<AtomicU32>;

    /// Mock explorer: a rich account with one NFT, unless `fail_nft` is set
    async fn explorer(
        State((hits, fail_nft)): State<(Hits, bool)>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Result<Json<Value>, StatusCode> {
        hits.fetch_add(1, Ordering::SeqCst);
        match params.get("action").map(String::as_str) {
            Some("balance") => Ok(Json(json!({ "status": "1", "message": "OK", "result": "12000000000000000000" }))),
            Some("txlist") => {
                let list: Vec<Value> = (0..1200)
                    .map(|i| json!({ "timeStamp": (31_536_000 - i * 10).to_string(), "value": "1" }))
                    .chain(std::iter::once(json!({ "timeStamp": "0", "value": "1" })))
                    .collect();
                Ok(Json(json!({ "status": "1", "message": "OK", "result": list })))
            }
            Some("tokennfttx") if fail_nft => Err(StatusCode::INTERNAL_SERVER_ERROR),
            Some("tokennfttx") => Ok(Json(json!({
                "status": "1",
                "message": "OK",
                "result": [{ "contractAddress": "0xc0ffee", "tokenID": "1", "tokenName": "Cats", "tokenSymbol": "CAT" }]
            }))),
            _ => Err(StatusCode::BAD_REQUEST),
        }
    }

    async fn analyzer(fail_nft: bool) -> (AddressAnalyzer, Hits) {
        let hits: Hits = Arc::new(AtomicU32::new(0));
        let router = Router::new()
            .route("/api", get(explorer))
            .with_state((hits.clone(), fail_nft));
        let client = ExplorerClient::new(spawn_mock_explorer(router).await, fast_policy(0)).unwrap();
        (AddressAnalyzer::new(client), hits)
    }

    #[test]
    fn test_validate_query_order() {
        assert!(matches!(
            validate_query(&AddressQuery::new("", "bitcoin")),
            Err(AppError::MissingParameter(_))
        ));
        assert!(matches!(
            validate_query(&AddressQuery::new("not-an-address", "bitcoin")),
            Err(AppError::UnsupportedNetwork(_))
        ));
        assert_eq!(
            validate_query(&AddressQuery::new(ADDRESS, "solana")),
            Err(AppError::UnsupportedNetwork("solana".into()))
        );
        assert!(matches!(
            validate_query(&AddressQuery::new("0x1234", "ethereum")),
            Err(AppError::InvalidAddress)
        ));
        assert_eq!(
            validate_query(&AddressQuery::new(ADDRESS, "Ethereum")),
            Ok(Network::Ethereum)
        );
    }

    #[test]
    fn test_activity_span() {
        assert_eq!(activity_span(Some(10), Some(99)), (10, 99));
        assert_eq!(activity_span(None, Some(1_700_000_000)), (0, 0));
        assert_eq!(activity_span(Some(1_600_000_000), None), (0, 0));
        assert_eq!(activity_span(None, None), (0, 0));
    }

    #[tokio::test]
    async fn test_unreadable_timestamp_earns_no_age_points() {
        let router = Router::new().route(
            "/api",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                match params.get("action").map(String::as_str) {
                    Some("balance") => Json(json!({ "status": "1", "message": "OK", "result": "0" })),
                    Some("txlist") => Json(json!({
                        "status": "1",
                        "message": "OK",
                        "result": [
                            { "timeStamp": "1700000000", "value": "1" },
                            { "timeStamp": "", "value": "1" }
                        ]
                    })),
                    _ => Json(json!({ "status": "0", "message": "No token transfers found", "result": [] })),
                }
            }),
        );
        let client = ExplorerClient::new(spawn_mock_explorer(router).await, fast_policy(0)).unwrap();

        let report = AddressAnalyzer::new(client)
            .analyze(&AddressQuery::new(ADDRESS, "ethereum"))
            .await
            .unwrap();

        assert_eq!(report.first_activity, None);
        assert_eq!(report.last_activity, Some(1_700_000_000));
        assert_eq!(report.credit_score.score, 0);
        assert_eq!(
            report.credit_score.recommendations,
            vec![
                crate::constants::RECOMMEND_HIGHER_BALANCE.to_string(),
                crate::constants::RECOMMEND_MORE_ACTIVITY.to_string(),
                crate::constants::RECOMMEND_CONSISTENT_ACTIVITY.to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_bitcoin_short_circuits_without_upstream_calls() {
        let (analyzer, hits) = analyzer(false).await;

        let result = analyzer
            .analyze(&AddressQuery::new("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa", "bitcoin"))
            .await;

        assert_eq!(result.unwrap_err(), AppError::UnsupportedNetwork("bitcoin".into()));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_full_analysis() {
        let (analyzer, hits) = analyzer(false).await;

        let report = analyzer.analyze(&AddressQuery::new(ADDRESS, "ethereum")).await.unwrap();

        assert_eq!(hits.load(Ordering::SeqCst), 3);
        assert_eq!(report.balance.formatted_value, "12.0");
        assert_eq!(report.total_transactions, 1201);
        assert_eq!(report.first_activity, Some(0));
        assert_eq!(report.last_activity, Some(31_536_000));
        assert_eq!(report.recent_transactions.len(), 10);
        // 30 (balance) + 40 (transactions) + 20 (exactly 365 days)
        assert_eq!(report.credit_score.score, 90);
        assert_eq!(report.credit_score.risk_tier, crate::models::RiskTier::Low);
        assert!(report.credit_score.recommendations.is_empty());
        assert_eq!(report.nft.token_stats.len(), 1);
        assert_eq!(report.first_activity_display, "January 1, 1970 at 12:00 AM UTC");
    }

    #[tokio::test]
    async fn test_nft_failure_does_not_block_results() {
        let (analyzer, _) = analyzer(true).await;

        let stage = analyzer
            .run(&AnalysisStage::Idle, AddressQuery::new(ADDRESS, "ethereum"))
            .await;

        let report = stage.report().expect("analysis should succeed");
        assert!(report.nft.transactions.is_empty());
        assert_eq!(report.credit_score.score, 90);
    }

    #[tokio::test]
    async fn test_run_records_terminal_error() {
        let (analyzer, _) = analyzer(false).await;

        let stage = analyzer
            .run(&AnalysisStage::Idle, AddressQuery::new(ADDRESS, "polygon"))
            .await;

        assert_eq!(stage.name(), "error");
        assert!(!stage.can_retry());
    }

    #[tokio::test]
    async fn test_balance_failure_fails_analysis() {
        let router = Router::new().route("/api", get(|| async { StatusCode::TOO_MANY_REQUESTS }));
        let client = ExplorerClient::new(spawn_mock_explorer(router).await, fast_policy(1)).unwrap();
        let analyzer = AddressAnalyzer::new(client);

        let stage = analyzer
            .run(&AnalysisStage::Idle, AddressQuery::new(ADDRESS, "ethereum"))
            .await;

        assert_eq!(stage.error(), Some(&AppError::RateLimited));
        assert!(stage.can_retry());
    }
}
