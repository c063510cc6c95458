//! # Configuration
//!
//! Loaded from environment variables; command-line flags override.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `BOOKSTORE_DB_PATH` | `bookstore.db` | SQLite database file |
//! | `BOOKSTORE_DB_TIMEOUT_SECS` | `5` | Connection acquire timeout |
//! | `RUST_LOG` | `warn` (`--verbose`: debug for bookstore crates) | Log filter |

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use bookstore_db::DbConfig;

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "bookstore.db";

const DEFAULT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite database file, created on first use.
    pub database_path: PathBuf,

    /// Connection acquire timeout.
    pub connect_timeout: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_path = lookup("BOOKSTORE_DB_PATH")
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());

        let timeout_secs: u64 = lookup("BOOKSTORE_DB_TIMEOUT_SECS")
            .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue("BOOKSTORE_DB_TIMEOUT_SECS".to_string()))?;

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue(
                "BOOKSTORE_DB_TIMEOUT_SECS".to_string(),
            ));
        }

        Ok(AppConfig {
            database_path: PathBuf::from(database_path),
            connect_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Applies a `--db` override.
    pub fn with_database_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.database_path = path;
        }
        self
    }

    /// Database settings for one invocation.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone()).connect_timeout(self.connect_timeout)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.database_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_env_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("BOOKSTORE_DB_PATH", "/var/lib/shop.db"),
            ("BOOKSTORE_DB_TIMEOUT_SECS", "2"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/shop.db"));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.db_config().database_path, PathBuf::from("/var/lib/shop.db"));
    }

    #[test]
    fn test_invalid_timeout() {
        assert!(AppConfig::from_lookup(lookup(&[("BOOKSTORE_DB_TIMEOUT_SECS", "soon")])).is_err());
        assert!(AppConfig::from_lookup(lookup(&[("BOOKSTORE_DB_TIMEOUT_SECS", "0")])).is_err());
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = AppConfig::from_lookup(lookup(&[("BOOKSTORE_DB_PATH", "env.db")]))
            .unwrap()
            .with_database_path(Some(PathBuf::from("flag.db")));
        assert_eq!(config.database_path, PathBuf::from("flag.db"));

        let config = config.with_database_path(None);
        assert_eq!(config.database_path, PathBuf::from("flag.db"));
    }
}
