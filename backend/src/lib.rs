pub mod constants;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

pub use error::{AppError, ExplorerError};
pub use routes::create_router;
pub use services::{AddressAnalyzer, ExplorerClient, RetryPolicy};
pub use utils::config::Config;

// Re-export common types
pub use anyhow::Result;
