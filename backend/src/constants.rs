// =============================================================================
// CryptoScore Backend Constants
// =============================================================================
// This file contains all constants used throughout the backend to enable
// easy tuning and configuration from a single location.

// =============================================================================
// EXPLORER API
// =============================================================================

/// Default block-explorer API endpoint (Blockscout, Ethereum mainnet)
pub const DEFAULT_EXPLORER_API_URL: &str = "https://eth.blockscout.com/api";

/// User agent sent with every explorer request
pub const EXPLORER_USER_AGENT: &str = "CryptoAddressAnalyzer/1.0";

/// Per-attempt request timeout
pub const DEFAULT_EXPLORER_TIMEOUT_MS: u64 = 30_000;

/// Retries allowed after the first attempt on 429 / 524 / timeout
pub const DEFAULT_EXPLORER_MAX_RETRIES: u32 = 3;

/// Fixed delay between retries
pub const DEFAULT_EXPLORER_RETRY_DELAY_MS: u64 = 2_000;

/// Cloudflare "a timeout occurred" status, not defined by http::StatusCode
pub const HTTP_STATUS_GATEWAY_TIMEOUT_CLOUDFLARE: u16 = 524;

/// Block range used for the full transaction list
pub const TXLIST_START_BLOCK: u64 = 0;
pub const TXLIST_END_BLOCK: u64 = 99_999_999;

/// Transactions returned alongside the aggregate statistics
pub const RECENT_TRANSACTIONS_LIMIT: usize = 10;

// =============================================================================
// UNITS
// =============================================================================

/// Decimals of the native currency (wei -> ether)
pub const NATIVE_DECIMALS: u32 = 18;

/// 10^18
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

// =============================================================================
// SCORING
// =============================================================================

/// Balance factor brackets in ether, checked top-down with strict `>`
pub const BALANCE_BRACKETS: [(f64, u32); 3] = [(10.0, 30), (5.0, 20), (1.0, 10)];

/// Transaction count brackets, checked top-down with strict `>`
pub const TRANSACTION_BRACKETS: [(u64, u32); 4] = [(1000, 40), (500, 30), (100, 20), (10, 10)];

/// Account age brackets in days, checked top-down with strict `>`
pub const ACCOUNT_AGE_BRACKETS: [(f64, u32); 3] = [(365.0, 30), (180.0, 20), (90.0, 10)];

/// Scores below this are high risk
pub const HIGH_RISK_BELOW: u32 = 50;

/// Scores below this (and not high risk) are medium risk
pub const MEDIUM_RISK_BELOW: u32 = 70;

pub const MAX_SCORE: u32 = 100;

pub const RECOMMEND_HIGHER_BALANCE: &str =
    "Consider maintaining a higher balance for better credit score";
pub const RECOMMEND_MORE_ACTIVITY: &str = "Increase transaction activity to improve credit score";
pub const RECOMMEND_CONSISTENT_ACTIVITY: &str =
    "Account is relatively new - maintain consistent activity";

// =============================================================================
// NETWORKS
// =============================================================================

/// The only network analysis is currently implemented for
pub const SUPPORTED_NETWORK: &str = "ethereum";

pub const COMING_SOON_MESSAGE: &str =
    "Analysis for this blockchain is coming soon! Currently, we only support Ethereum.";

// =============================================================================
// ADDRESS VALIDATION
// =============================================================================

/// EVM address: 0x followed by 40 hex characters
pub const EVM_ADDRESS_PATTERN: &str = r"^0x[a-fA-F0-9]{40}$";

/// Legacy base58 (1... / 3...) or bech32 (bc1...) bitcoin address
pub const BITCOIN_ADDRESS_PATTERN: &str =
    r"^[13][a-km-zA-HJ-NP-Z1-9]{25,34}$|^bc1[a-z0-9]{39,59}$";

// =============================================================================
// SERVER CONFIGURATION
// =============================================================================

/// Default server port if not specified in environment
pub const DEFAULT_SERVER_PORT: u16 = 3000;
