use serde_json::Value;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

use crate::error::AppError;
use crate::models::{ExplorerNftTransfer, NftActivity, NftTransferRecord, TokenCollectionStats};
use crate::services::explorer::{ExplorerClient, account_params};

/// Fetch ERC-721 transfers of `address`, grouped per collection.
///
/// NFT data never fails an analysis: upstream errors and missing data come
/// back as an empty `NftActivity`. Only a missing address is an error.
pub async fn get_nft_transactions(client: &ExplorerClient, address: &str) -> Result<NftActivity, AppError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(AppError::MissingParameter("Address is required".to_string()));
    }

    let response = match client.fetch(&account_params("tokennfttx", address)).await {
        Ok(response) => response,
        Err(e) => {
            warn!("NFT transfers unavailable for {}: {}", address, e);
            return Ok(NftActivity::empty(address));
        }
    };

    let transfers: Vec<ExplorerNftTransfer> = match response.result {
        Some(list @ Value::Array(_)) => match serde_json::from_value(list) {
            Ok(transfers) => transfers,
            Err(e) => {
                warn!("Unexpected tokennfttx entry shape for {}: {}", address, e);
                return Ok(NftActivity::empty(address));
            }
        },
        _ => {
            info!("No NFT transfer data for {} ({})", address, response.message);
            return Ok(NftActivity::empty(address));
        }
    };

    info!("Fetched {} NFT transfers for {}", transfers.len(), address);
    Ok(build_nft_activity(address, transfers))
}

/// Project raw transfers and roll them up by contract, keeping collections
/// in the order they are first seen.
pub fn build_nft_activity(address: &str, transfers: Vec<ExplorerNftTransfer>) -> NftActivity {
    let mut token_stats: Vec<TokenCollectionStats> = Vec::new();
    let mut index_by_contract: HashMap<String, usize> = HashMap::new();
    let mut token_ids: Vec<HashSet<String>> = Vec::new();

    for transfer in &transfers {
        let idx = *index_by_contract
            .entry(transfer.contract_address.clone())
            .or_insert_with(|| {
                token_stats.push(TokenCollectionStats {
                    contract_address: transfer.contract_address.clone(),
                    token_name: transfer.token_name.clone(),
                    token_symbol: transfer.token_symbol.clone(),
                    transaction_count: 0,
                    unique_token_count: 0,
                });
                token_ids.push(HashSet::new());
                token_stats.len() - 1
            });

        token_stats[idx].transaction_count += 1;
        token_ids[idx].insert(transfer.token_id.clone());
    }

    for (stats, ids) in token_stats.iter_mut().zip(&token_ids) {
        stats.unique_token_count = ids.len();
    }

    let transactions = transfers
        .into_iter()
        .map(|t| NftTransferRecord {
            hash: t.hash,
            from: t.from,
            to: t.to,
            token_id: t.token_id,
            token_name: t.token_name,
            token_symbol: t.token_symbol,
            contract_address: t.contract_address,
            timestamp: t.time_stamp,
            block_number: t.block_number,
        })
        .collect();

    NftActivity {
        address: address.to_string(),
        transactions,
        token_stats,
    }
}
