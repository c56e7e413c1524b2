//! Application settings with environment overrides.

use serde::{Deserialize, Serialize};
use std::env::{self, VarError};
use thiserror::Error;
use tracing::debug;

pub const ENV_DATABASE_URL: &str = "PATTERN_DB_URL";
pub const ENV_LOG_FILE: &str = "PATTERN_LOG_FILE";
pub const ENV_ALERT_EMAIL: &str = "PATTERN_ALERT_EMAIL";

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

/// Everything the demo application needs to wire itself up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Connection label for the shared [`Database`](crate::database::Database).
    pub database_url: String,
    /// Where the [`LoggingListener`](crate::listeners::LoggingListener) writes.
    pub log_file: String,
    /// Recipient of the [`EmailAlertsListener`](crate::listeners::EmailAlertsListener).
    pub alert_email: String,
    /// Log line template for `open` events; `%s` is the file name.
    pub open_message: String,
    /// Alert template for `save` events; `%s` is the file name.
    pub save_message: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: crate::database::DEFAULT_CONNECTION.to_string(),
            log_file: "/path/to/log.txt".to_string(),
            alert_email: "admin@example.com".to_string(),
            open_message: "Someone has opened the file: %s".to_string(),
            save_message: "Someone has changed the file: %s".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `PATTERN_DB_URL`, `PATTERN_LOG_FILE` and `PATTERN_ALERT_EMAIL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = read_var(ENV_DATABASE_URL)? {
            config.database_url = url;
        }
        if let Some(path) = read_var(ENV_LOG_FILE)? {
            config.log_file = path;
        }
        if let Some(email) = read_var(ENV_ALERT_EMAIL)? {
            config.alert_email = email;
        }
        debug!(?config, "Configuration loaded");
        Ok(config)
    }
}

fn read_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_in_memory_database() {
        let config = AppConfig::default();
        assert_eq!(config.database_url, "memory://default");
        assert!(config.open_message.contains("%s"));
        assert!(config.save_message.contains("%s"));
    }

    // The only test touching the process environment, so it cannot race another one.
    #[test]
    fn test_from_env_overrides_and_rejects_non_unicode() {
        env::set_var(ENV_DATABASE_URL, "memory://staging");
        env::set_var(ENV_LOG_FILE, "/var/log/editor.log");
        env::set_var(ENV_ALERT_EMAIL, "ops@example.com");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.database_url, "memory://staging");
        assert_eq!(config.log_file, "/var/log/editor.log");
        assert_eq!(config.alert_email, "ops@example.com");
        assert_eq!(config.open_message, AppConfig::default().open_message);

        #[cfg(unix)]
        {
            use std::ffi::OsString;
            use std::os::unix::ffi::OsStringExt;

            env::set_var(ENV_LOG_FILE, OsString::from_vec(vec![0x66, 0x6f, 0x80]));
            assert_eq!(AppConfig::from_env(), Err(ConfigError::NotUnicode(ENV_LOG_FILE)));
        }

        for key in [ENV_DATABASE_URL, ENV_LOG_FILE, ENV_ALERT_EMAIL] {
            env::remove_var(key);
        }
        assert_eq!(AppConfig::from_env().unwrap(), AppConfig::default());
    }
}
