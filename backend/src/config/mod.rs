//! Configuration module for the news backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Raised when an environment variable is set but cannot be parsed.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid NEWS_BIND_ADDR {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("invalid boolean for {name}: {value:?}")]
    Bool { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of the human-readable format
    pub log_json: bool,
    /// Optional JSON seed bundle loaded into a fresh database at startup
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from any name-to-value source.
    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let db_path = var("NEWS_DB_PATH")
            .unwrap_or_else(|| "./data/news.sqlite".to_string())
            .into();

        let raw_addr = var("NEWS_BIND_ADDR").unwrap_or_else(|| "127.0.0.1:9090".to_string());
        let bind_addr = raw_addr
            .parse()
            .map_err(|source| ConfigError::BindAddr {
                value: raw_addr.clone(),
                source,
            })?;

        let log_level = var("NEWS_LOG_LEVEL").unwrap_or_else(|| "info".to_string());
        let log_json = parse_bool("NEWS_LOG_JSON", var("NEWS_LOG_JSON"))?;
        let seed_file = var("NEWS_SEED_FILE").map(PathBuf::from);

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            log_json,
            seed_file,
        })
    }
}

fn parse_bool(name: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Bool { name, value }),
    }
}
