pub mod config;
pub mod logging;
pub mod time_format;
pub mod wei_conversion;

pub use config::Config;
pub use logging::init_logging;
