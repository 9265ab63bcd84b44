pub mod analysis;
pub mod balance;
pub mod explorer;
pub mod nft;
pub mod scoring;
pub mod transactions;

pub use analysis::AddressAnalyzer;
pub use explorer::{ExplorerClient, RetryPolicy};
