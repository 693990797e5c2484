//! Environment-backed settings for the binary.
//!
//! `.env` in the working directory is merged first; real environment
//! variables take precedence over it.

use std::env;
use std::path::PathBuf;

use bot_logging::{parse_level, LevelFilter, LogDestination};
use homework_core::{Config, ConfigError};

const LOG_FILE_KEY: &str = "LOG_FILE";
const LOG_LEVEL_KEY: &str = "LOG_LEVEL";
const DEFAULT_LOG_FILE: &str = "program.log";

#[derive(Debug, Clone)]
pub struct LogSettings {
    pub destination: LogDestination,
    pub level: LevelFilter,
    pub path: PathBuf,
}

pub fn load_dotenv() {
    // A missing .env file is the normal case in production.
    let _ = dotenvy::dotenv();
}

pub fn env_lookup(key: &str) -> Option<String> {
    env::var(key).ok()
}

pub fn load_config() -> Result<Config, ConfigError> {
    Config::from_lookup(env_lookup)
}

pub fn log_settings<F>(lookup: F) -> Result<LogSettings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let level = match lookup(LOG_LEVEL_KEY) {
        Some(raw) => parse_level(&raw).ok_or_else(|| ConfigError::Invalid {
            key: LOG_LEVEL_KEY,
            reason: format!("unknown level {raw:?}"),
        })?,
        None => LevelFilter::Debug,
    };
    let path = lookup(LOG_FILE_KEY)
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    Ok(LogSettings {
        destination: LogDestination::Both,
        level,
        path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_settings_default_to_debug_in_program_log() {
        let settings = log_settings(|_| None).unwrap();
        assert_eq!(settings.level, LevelFilter::Debug);
        assert_eq!(settings.path, PathBuf::from("program.log"));
    }

    #[test]
    fn log_settings_reject_unknown_level() {
        let err = log_settings(|key| (key == "LOG_LEVEL").then(|| "chatty".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "LOG_LEVEL", .. }));
    }

    #[test]
    fn log_settings_honour_overrides() {
        let settings = log_settings(|key| match key {
            "LOG_LEVEL" => Some("warn".to_string()),
            "LOG_FILE" => Some("/tmp/bot.log".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(settings.level, LevelFilter::Warn);
        assert_eq!(settings.path, PathBuf::from("/tmp/bot.log"));
    }
}
