use serde_json::Value;
use tracing::{error, info};

use crate::constants::{RECENT_TRANSACTIONS_LIMIT, TXLIST_END_BLOCK, TXLIST_START_BLOCK};
use crate::error::AppError;
use crate::models::{ExplorerTransaction, TransactionSummary};
use crate::services::explorer::{ExplorerClient, account_params};
use crate::utils::time_format::parse_epoch;

/// Fetch the full transaction list of `address` (newest first) and summarize it.
pub async fn get_transactions(client: &ExplorerClient, address: &str) -> Result<TransactionSummary, AppError> {
    if address.trim().is_empty() {
        return Err(AppError::MissingParameter("Address is required".to_string()));
    }

    let mut params = account_params("txlist", address.trim());
    params.push(("startblock", TXLIST_START_BLOCK.to_string()));
    params.push(("endblock", TXLIST_END_BLOCK.to_string()));
    params.push(("sort", "desc".to_string()));

    let response = client
        .fetch(&params)
        .await
        .map_err(|e| AppError::from_explorer(e, "Failed to fetch transactions"))?;

    let transactions: Vec<ExplorerTransaction> = match response.result {
        Some(list @ Value::Array(_)) => serde_json::from_value(list).map_err(|e| {
            error!("Unexpected txlist entry shape: {}", e);
            AppError::Upstream("Failed to fetch transactions".to_string())
        })?,
        _ => return Err(AppError::NoData("No transaction data found".to_string())),
    };

    info!("Fetched {} transactions for {}", transactions.len(), address);
    Ok(summarize_transactions(transactions))
}

/// Aggregate a newest-first transaction list. Statistics cover the whole
/// list; only the first `RECENT_TRANSACTIONS_LIMIT` entries are kept.
pub fn summarize_transactions(mut transactions: Vec<ExplorerTransaction>) -> TransactionSummary {
    let total_transactions = transactions.len();
    let last_activity = transactions.first().and_then(|tx| parse_epoch(&tx.time_stamp));
    let first_activity = transactions.last().and_then(|tx| parse_epoch(&tx.time_stamp));

    // f64 accumulation; precision loss on very large sums is accepted.
    // Folding from +0.0 keeps an empty list at "0" (`sum` starts at -0.0).
    let total_volume = transactions
        .iter()
        .map(|tx| tx.value.trim().parse::<f64>().unwrap_or(0.0))
        .fold(0.0_f64, |acc, value| acc + value);

    transactions.truncate(RECENT_TRANSACTIONS_LIMIT);

    TransactionSummary {
        total_transactions,
        first_activity,
        last_activity,
        total_volume: total_volume.to_string(),
        transactions,
    }
}
