use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::games::NEXT_GAMES_TIMEOUT;
use crate::nba_stats::{DEFAULT_LIVE_BASE_URL, DEFAULT_STATS_BASE_URL};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Runtime settings. Every value has a default, so an empty environment is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub stats_base_url: String,
    pub live_base_url: String,
    pub next_games_timeout: Duration,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any name -> value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.trim().parse::<SocketAddr>().map_err(|_| ConfigError::BindAddr {
            name: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let next_games_timeout = match lookup("NEXT_GAMES_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::Timeout {
                    name: "NEXT_GAMES_TIMEOUT_SECS",
                    value: raw.clone(),
                })?,
            None => NEXT_GAMES_TIMEOUT,
        };

        Ok(Config {
            bind_addr,
            stats_base_url: lookup("NBA_STATS_BASE_URL").unwrap_or_else(|| DEFAULT_STATS_BASE_URL.to_string()),
            live_base_url: lookup("NBA_LIVE_BASE_URL").unwrap_or_else(|| DEFAULT_LIVE_BASE_URL.to_string()),
            next_games_timeout,
            debug: lookup("DEBUG").map(|v| is_truthy(&v)).unwrap_or(false),
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
