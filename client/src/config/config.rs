use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};

use super::LoggingConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub player_symbol: char,
    pub ai_symbol: char,
    pub empty_symbol: char,
    /// Empty cells show the number to type instead of `empty_symbol`.
    #[serde(default = "default_show_cell_numbers")]
    pub show_cell_numbers: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_show_cell_numbers() -> bool {
    true
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        let symbols = [
            ("player_symbol", self.player_symbol),
            ("ai_symbol", self.ai_symbol),
            ("empty_symbol", self.empty_symbol),
        ];

        for (name, symbol) in symbols {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(format!("{} must be a visible character", name));
            }
            if self.show_cell_numbers && symbol.is_ascii_digit() {
                return Err(format!("{} cannot be a digit while cell numbers are shown", name));
            }
        }

        if self.player_symbol == self.ai_symbol
            || self.player_symbol == self.empty_symbol
            || self.ai_symbol == self.empty_symbol
        {
            return Err("player_symbol, ai_symbol and empty_symbol must differ".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player_symbol: 'X',
            ai_symbol: 'O',
            empty_symbol: '.',
            show_cell_numbers: default_show_cell_numbers(),
            logging: LoggingConfig::default(),
        }
    }
}
