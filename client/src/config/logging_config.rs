use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LoggingConfig {
    pub enabled: bool,
    #[serde(default)]
    pub use_prefix: bool,
}
