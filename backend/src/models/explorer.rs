use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Envelope returned by every `module=account` action of the explorer API.
///
/// `result` is left optional: the API omits it or sends `null` when an
/// address has no data, and some actions put an error string there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerResponse<T> {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub result: Option<T>,
}

/// One entry of `action=txlist`. Upstream encodes every number as a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerTransaction {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub block_number: String,
    #[serde(default)]
    pub time_stamp: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub value: String,
    /// Everything else upstream sends (gas, input, confirmations, ...) is passed through untouched
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// One entry of `action=tokennfttx` (ERC-721 transfer event)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplorerNftTransfer {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub block_number: String,
    #[serde(default)]
    pub time_stamp: String,
    #[serde(default)]
    pub contract_address: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    #[serde(default, rename = "tokenID")]
    pub token_id: String,
    #[serde(default)]
    pub token_name: String,
    #[serde(default)]
    pub token_symbol: String,
}
