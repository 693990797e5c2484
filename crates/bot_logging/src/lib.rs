#![deny(missing_docs)]
//! Shared logging utilities for the homework bot workspace.
//!
//! This crate provides the `bot_*` logging macros used across the codebase,
//! the sink setup used by the binary, and a minimal test initializer for the
//! global logger.

use std::fs::{File, OpenOptions};
use std::path::Path;

pub use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Marker prepended to messages logged through [`bot_critical!`].
pub const CRITICAL_MARKER: &str = "CRITICAL";

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! bot_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! bot_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! bot_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Logs a critical message. The `log` facade tops out at `error`, so the
/// record is emitted at that level with a [`CRITICAL_MARKER`] prefix.
#[macro_export]
macro_rules! bot_critical {
    ($($arg:tt)*) => {{
        log::error!("{}: {}", $crate::CRITICAL_MARKER, format_args!($($arg)*));
    }};
}

/// Destination for log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogDestination {
    /// Append to the log file only.
    File,
    /// Write to terminal (stdout/stderr).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Parses a level name such as `debug` or `WARN` into a filter.
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

/// Initializes the global logger.
///
/// For `LogDestination::File` or `Both`, appends to `log_path`. When the file
/// cannot be opened the logger falls back to the terminal so that records are
/// never silently dropped.
pub fn initialize(destination: LogDestination, level: LevelFilter, log_path: &Path) {
    let config = build_config();
    let terminal = |config: Config| -> Box<dyn SharedLogger> {
        TermLogger::new(level, config, TerminalMode::Mixed, ColorChoice::Auto)
    };

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::File => match create_file_logger(level, config.clone(), log_path) {
            Some(file_logger) => vec![file_logger as Box<dyn SharedLogger>],
            None => vec![terminal(config)],
        },
        LogDestination::Terminal => vec![terminal(config)],
        LogDestination::Both => {
            let mut loggers = vec![terminal(config.clone())];
            if let Some(file_logger) = create_file_logger(level, config, log_path) {
                loggers.push(file_logger);
            }
            loggers
        }
    };

    let _ = CombinedLogger::init(loggers);
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    log_path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    match OpenOptions::new().create(true).append(true).open(log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not open log file at {:?}: {}", log_path, err);
            None
        }
    }
}
