pub mod analysis;
pub mod explorer;
pub mod network;
pub mod stage;

pub use analysis::{
    AnalysisReport, BalanceResult, NftActivity, NftTransferRecord, RiskTier, ScoreResult,
    TokenCollectionStats, TransactionSummary,
};
pub use explorer::{ExplorerNftTransfer, ExplorerResponse, ExplorerTransaction};
pub use network::{AddressQuery, Network, UnknownNetwork};
pub use stage::AnalysisStage;
