mod config;
mod render;
mod session;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use tictactoe_common::config::ConfigManager;
use tictactoe_common::{log, logger};

use config::get_config_manager;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Play tic-tac-toe against a perfect opponent")]
struct Args {
    /// Config file to use instead of the one next to the executable
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the effective config back to the config file
    #[arg(long)]
    save_config: bool,

    /// Log to stderr even if the config disables logging
    #[arg(long)]
    log: bool,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = match args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config = config_manager.get_config()?;

    if args.log || config.logging.enabled {
        let prefix = if args.use_log_prefix || config.logging.use_prefix {
            Some("Client".to_string())
        } else {
            None
        };
        logger::init_logger(prefix);
    }

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Config saved");
    }

    log!(
        "Starting with symbols player='{}' ai='{}'",
        config.player_symbol,
        config.ai_symbol
    );

    session::run(&config, io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
