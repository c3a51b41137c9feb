//! Configuration loading and representation.
//!
//! Everything is read from `STOCKROOM_*` environment variables once at startup.
//! Unset variables fall back to defaults; malformed ones are rejected.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://inventory.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_TRANSFORM_DELAY_MS: u64 = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Connection settings for the inventory store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub database_url: String,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

/// Process-wide configuration for the inventory server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub store: StoreConfig,
    /// Simulated latency of the transform endpoints.
    pub transform_delay: Duration,
    /// Served by `GET /file-path`.
    pub project_file: Option<PathBuf>,
    /// Served by `GET /file-path?projectpath=true`.
    pub project_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            store: StoreConfig::default(),
            transform_delay: Duration::from_millis(DEFAULT_TRANSFORM_DELAY_MS),
            project_file: None,
            project_dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup (tests inject a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let bind_addr = match get("STOCKROOM_BIND_ADDR") {
            Some(v) => parse(&v, "STOCKROOM_BIND_ADDR", "socket address")?,
            None => defaults.bind_addr,
        };

        let max_connections = match get("STOCKROOM_DB_MAX_CONNECTIONS") {
            Some(v) => {
                let n: u32 = parse(&v, "STOCKROOM_DB_MAX_CONNECTIONS", "positive integer")?;
                if n == 0 {
                    return Err(invalid("STOCKROOM_DB_MAX_CONNECTIONS", "positive integer", v));
                }
                n
            }
            None => defaults.store.max_connections,
        };

        let transform_delay = match get("STOCKROOM_TRANSFORM_DELAY_MS") {
            Some(v) => Duration::from_millis(parse(
                &v,
                "STOCKROOM_TRANSFORM_DELAY_MS",
                "millisecond count",
            )?),
            None => defaults.transform_delay,
        };

        Ok(Self {
            bind_addr,
            store: StoreConfig {
                database_url: get("STOCKROOM_DATABASE_URL")
                    .unwrap_or(defaults.store.database_url),
                max_connections,
            },
            transform_delay,
            project_file: get("STOCKROOM_PROJECT_FILE").map(PathBuf::from),
            project_dir: get("STOCKROOM_PROJECT_DIR").map(PathBuf::from),
        })
    }
}

fn parse<T: std::str::FromStr>(
    value: &str,
    var: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(var, expected, value.to_string()))
}

fn invalid(var: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError::Invalid {
        var,
        expected,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(cfg.store.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.store.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(cfg.transform_delay, Duration::from_secs(10));
        assert!(cfg.project_file.is_none());
        assert!(cfg.project_dir.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = load(&[
            ("STOCKROOM_BIND_ADDR", "0.0.0.0:8081"),
            ("STOCKROOM_DATABASE_URL", "sqlite://stock.db"),
            ("STOCKROOM_DB_MAX_CONNECTIONS", "2"),
            ("STOCKROOM_TRANSFORM_DELAY_MS", "0"),
            ("STOCKROOM_PROJECT_FILE", "/srv/scene.blend"),
            ("STOCKROOM_PROJECT_DIR", "/srv"),
        ])
        .unwrap();

        assert_eq!(cfg.bind_addr.port(), 8081);
        assert_eq!(cfg.store.database_url, "sqlite://stock.db");
        assert_eq!(cfg.store.max_connections, 2);
        assert_eq!(cfg.transform_delay, Duration::ZERO);
        assert_eq!(cfg.project_file, Some(PathBuf::from("/srv/scene.blend")));
        assert_eq!(cfg.project_dir, Some(PathBuf::from("/srv")));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = load(&[("STOCKROOM_BIND_ADDR", "  ")]).unwrap();
        assert_eq!(cfg.bind_addr.to_string(), DEFAULT_BIND_ADDR);
    }

    #[test]
    fn malformed_values_are_rejected() {
        let err = load(&[("STOCKROOM_BIND_ADDR", "localhost")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "STOCKROOM_BIND_ADDR", .. }));

        let err = load(&[("STOCKROOM_DB_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "STOCKROOM_DB_MAX_CONNECTIONS", .. }));

        let err = load(&[("STOCKROOM_TRANSFORM_DELAY_MS", "-5")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "STOCKROOM_TRANSFORM_DELAY_MS", .. }));
    }
}
