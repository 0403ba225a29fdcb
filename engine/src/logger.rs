use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    fn label(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
    min_level: LogLevel,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        let min_level = if verbose { LogLevel::Debug } else { LogLevel::Info };
        Self { prefix, min_level }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn log(&self, level: LogLevel, message: &str) {
        if !self.enabled(level) {
            return;
        }
        println!("{}", self.format_line(level, message));
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        match (&self.prefix, level) {
            (Some(prefix), LogLevel::Info) => format!("[{}][{}] {}", timestamp, prefix, message),
            (Some(prefix), _) => {
                format!("[{}][{}][{}] {}", timestamp, prefix, level.label(), message)
            }
            (None, LogLevel::Info) => format!("[{}] {}", timestamp, message),
            (None, _) => format!("[{}][{}] {}", timestamp, level.label(), message),
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first configuration.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// Messages sent before `init_logger` are dropped, so library code and tests
/// can log without any setup.
pub fn log(level: LogLevel, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, message);
    }
}

pub fn debug_enabled() -> bool {
    LOGGER
        .get()
        .is_some_and(|logger| logger.enabled(LogLevel::Debug))
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log($crate::logger::LogLevel::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if $crate::logger::debug_enabled() {
            $crate::logger::log($crate::logger::LogLevel::Debug, &format!($($arg)*))
        }
    };
}
