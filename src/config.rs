//! Configuration Module
//!
//! Handles loading and managing server configuration from environment
//! variables, optionally seeded from a `.env` file.

use std::env;
use std::str::FromStr;

use tracing::warn;

use crate::cache::EvictionPolicy;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub memory_slots: usize,
    /// Default TTL in seconds for puts without explicit TTL
    pub memory_ttl: i64,
    /// What to do with a new key when the cache is full
    pub eviction_policy: EvictionPolicy,
    /// HTTP server port
    pub port: u16,
    /// Trace every engine decision
    pub debug: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMORY_SLOTS` - Maximum cache entries (default: 10000)
    /// - `MEMORY_TTL` - Default TTL in seconds (default: 3600)
    /// - `EVIC_POLICY` - `REJECT`, `OLDEST_FIRST` or `NEWEST_FIRST` (default: REJECT)
    /// - `PORT` - HTTP server port (default: 80)
    /// - `DEBUG` - Enable debug tracing (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads a `.env` file if one is present, then reads the environment.
    ///
    /// Variables already set in the process environment take precedence.
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Builds a Config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            memory_slots: parse_or("MEMORY_SLOTS", lookup("MEMORY_SLOTS"), defaults.memory_slots),
            memory_ttl: parse_or("MEMORY_TTL", lookup("MEMORY_TTL"), defaults.memory_ttl),
            eviction_policy: parse_or(
                "EVIC_POLICY",
                lookup("EVIC_POLICY"),
                defaults.eviction_policy,
            ),
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            debug: lookup("DEBUG").map(|v| parse_flag(&v)).unwrap_or(defaults.debug),
        }
    }

    /// Default log filter for the tracing subscriber.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "object_cache=debug,tower_http=debug"
        } else {
            "object_cache=info,tower_http=info"
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            memory_slots: 10_000,
            memory_ttl: 3600,
            eviction_policy: EvictionPolicy::Reject,
            port: 80,
            debug: false,
        }
    }
}

fn parse_or<T: FromStr>(name: &str, raw: Option<String>, default: T) -> T {
    match raw {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid value '{}' for {}, using default", raw, name);
            default
        }),
        None => default,
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
