//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos site settings (address, site root) come from `[package.metadata.leptos]`.

use thiserror::Error;

/// Default `tracing` filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{name} must be a boolean (true/false/1/0), got '{value}'")]
    InvalidBool { name: &'static str, value: String },
    #[error("{name} must be a non-negative integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive (RUST_LOG)
    pub log_filter: String,

    /// Compress responses with brotli/gzip (GENLINGO_COMPRESSION)
    pub compression: bool,

    /// `Cache-Control: max-age` for /pkg assets (GENLINGO_STATIC_CACHE_SECS)
    pub static_cache_secs: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            compression: true,
            static_cache_secs: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from any variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_filter = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let compression = match lookup("GENLINGO_COMPRESSION") {
            Some(value) => parse_bool("GENLINGO_COMPRESSION", &value)?,
            None => defaults.compression,
        };

        let static_cache_secs = lookup("GENLINGO_STATIC_CACHE_SECS")
            .map(|value| {
                value
                    .trim()
                    .parse::<u32>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        name: "GENLINGO_STATIC_CACHE_SECS",
                        value,
                    })
            })
            .transpose()?;

        Ok(Self {
            log_filter,
            compression,
            static_cache_secs,
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "info");
        assert!(config.compression);
        assert_eq!(config.static_cache_secs, None);
    }

    #[test]
    fn test_all_fields() {
        let config = Config::from_lookup(lookup(&[
            ("RUST_LOG", "genlingo=debug"),
            ("GENLINGO_COMPRESSION", "off"),
            ("GENLINGO_STATIC_CACHE_SECS", "3600"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "genlingo=debug");
        assert!(!config.compression);
        assert_eq!(config.static_cache_secs, Some(3600));
        assert!(config.static_cache_secs.is_some());
    }

    #[test]
    fn test_blank_log_filter_falls_back() {
        let config = Config::from_lookup(lookup(&[("RUST_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn test_bool_spellings() {
        for value in ["1", "true", "TRUE", "yes", "on"] {
            let config =
                Config::from_lookup(lookup(&[("GENLINGO_COMPRESSION", value)])).unwrap();
            assert!(config.compression, "{} should be true", value);
        }
        for value in ["0", "false", "No", "off"] {
            let config =
                Config::from_lookup(lookup(&[("GENLINGO_COMPRESSION", value)])).unwrap();
            assert!(!config.compression, "{} should be false", value);
        }
    }

    #[test]
    fn test_invalid_bool() {
        let err = Config::from_lookup(lookup(&[("GENLINGO_COMPRESSION", "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                name: "GENLINGO_COMPRESSION",
                value: "maybe".to_string()
            }
        );
        assert!(err.to_string().contains("GENLINGO_COMPRESSION"));
    }

    #[test]
    fn test_invalid_cache_secs() {
        let err =
            Config::from_lookup(lookup(&[("GENLINGO_STATIC_CACHE_SECS", "-5")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { .. }));
    }

    #[test]
    fn test_from_env_does_not_panic() {
        // Actual values depend on the environment
        let _ = Config::from_env();
    }
}
