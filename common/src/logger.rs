use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    pub fn format(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }

    // stderr keeps log lines out of the board drawn on stdout.
    pub fn log(&self, file: &str, line: u32, message: &str) {
        eprintln!("{}", self.format(file, line, message));
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Dropped silently until [`init_logger`] has been called.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_strips_directories_from_file() {
        let logger = Logger::new(None);

        let line = logger.format("src/games/tictactoe/game_state.rs", 42, "hello");

        assert!(line.ends_with("[game_state.rs:42] hello"));
    }

    #[test]
    fn test_format_includes_prefix() {
        let logger = Logger::new(Some("Client".to_string()));

        let line = logger.format("C:\\src\\main.rs", 7, "started");

        assert!(line.contains("[Client][main.rs:7] started"));
    }
}
