use serde_json::Value;
use tracing::info;

use crate::error::AppError;
use crate::models::BalanceResult;
use crate::services::explorer::{ExplorerClient, account_params};
use crate::utils::wei_conversion::format_wei;

/// Fetch the native balance of `address` in wei, exactly as the explorer reports it.
pub async fn get_balance(client: &ExplorerClient, address: &str, network: &str) -> Result<String, AppError> {
    if address.trim().is_empty() || network.trim().is_empty() {
        return Err(AppError::MissingParameter("Address and network are required".to_string()));
    }

    let response = client
        .fetch(&account_params("balance", address.trim()))
        .await
        .map_err(|e| AppError::from_explorer(e, "Failed to fetch balance"))?;

    let raw = match response.result {
        Some(Value::String(s)) if !s.is_empty() => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(AppError::NoData("No balance data found".to_string())),
    };

    info!("Fetched balance for {}: {} wei", address, raw);
    Ok(raw)
}

/// Pair the raw balance with its ether rendering
pub fn to_balance_result(raw: String) -> Result<BalanceResult, AppError> {
    let formatted_value = format_wei(&raw).map_err(|e| {
        tracing::error!("Unusable balance from explorer: {}", e);
        AppError::Upstream("Failed to fetch balance".to_string())
    })?;

    Ok(BalanceResult {
        raw_value: raw,
        formatted_value,
    })
}
