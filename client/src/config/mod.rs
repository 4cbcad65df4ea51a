mod config;
mod logging_config;

pub use config::{Config, get_config_manager};
pub use logging_config::LoggingConfig;
