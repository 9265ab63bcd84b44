pub mod analyze;
pub mod balance;
pub mod token_holders;
pub mod transactions;

pub use analyze::analyze_address;
pub use balance::get_balance;
pub use token_holders::get_token_holders;
pub use transactions::get_transactions;

use serde::{Deserialize, Serialize};
use crate::services::ExplorerClient;

/// Shared handler state: the explorer client is cheap to clone
pub type AppState = ExplorerClient;

#[derive(Debug, Default, Deserialize)]
pub struct AddressParams {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub network: Option<String>,
}

impl AddressParams {
    pub fn address(&self) -> &str {
        self.address.as_deref().unwrap_or("")
    }

    pub fn network(&self) -> &str {
        self.network.as_deref().unwrap_or("")
    }
}

/// Success envelope, mirroring the explorer's own `{ status, message, result }`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub result: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(result: T) -> Self {
        Self {
            status: "1",
            message: Some("OK"),
            result,
        }
    }

    pub fn bare(result: T) -> Self {
        Self {
            status: "1",
            message: None,
            result,
        }
    }
}
