use serde::{Deserialize, Serialize};

use super::explorer::ExplorerTransaction;

/// Native balance of an address. `raw_value` (wei) is authoritative,
/// `formatted_value` is derived from it for display and scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResult {
    pub raw_value: String,
    pub formatted_value: String,
}

/// Aggregate statistics over an address's full transaction list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionSummary {
    pub total_transactions: usize,
    /// Epoch seconds of the oldest transaction; `None` when there are none
    pub first_activity: Option<i64>,
    /// Epoch seconds of the newest transaction; `None` when there are none
    pub last_activity: Option<i64>,
    pub total_volume: String,
    /// Most recent transactions, newest first
    pub transactions: Vec<ExplorerTransaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftTransferRecord {
    pub hash: String,
    pub from: String,
    pub to: String,
    #[serde(rename = "tokenID")]
    pub token_id: String,
    pub token_name: String,
    pub token_symbol: String,
    pub contract_address: String,
    pub timestamp: String,
    pub block_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCollectionStats {
    pub contract_address: String,
    pub token_name: String,
    pub token_symbol: String,
    pub transaction_count: usize,
    pub unique_token_count: usize,
}

/// NFT transfers of an address plus per-collection rollups
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftActivity {
    pub address: String,
    pub transactions: Vec<NftTransferRecord>,
    pub token_stats: Vec<TokenCollectionStats>,
}

impl NftActivity {
    pub fn empty(address: &str) -> Self {
        Self {
            address: address.to_string(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Medium => "Medium",
            RiskTier::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u32,
    pub risk_tier: RiskTier,
    pub recommendations: Vec<String>,
}

/// Everything produced by one analysis of one address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub address: String,
    pub network: String,
    pub balance: BalanceResult,
    pub total_transactions: usize,
    pub first_activity: Option<i64>,
    pub last_activity: Option<i64>,
    pub first_activity_display: String,
    pub last_activity_display: String,
    pub total_volume: String,
    pub recent_transactions: Vec<ExplorerTransaction>,
    pub credit_score: ScoreResult,
    pub nft: NftActivity,
}
