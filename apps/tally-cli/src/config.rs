//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable          | Default | Meaning                                  |
//! |-------------------|---------|------------------------------------------|
//! | `TALLY_MAX_ITEMS` | 1000    | Largest item list a request may carry    |
//! | `TALLY_LOG`       | `info`  | tracing filter directive                 |

use std::env;

use tally_core::{CheckoutLimits, DEFAULT_MAX_ITEMS};

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct TallyConfig {
    /// Maximum line items accepted per request
    pub max_items: usize,

    /// tracing-subscriber filter directive
    pub log_filter: String,
}

impl TallyConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_items = match lookup("TALLY_MAX_ITEMS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::InvalidValue("TALLY_MAX_ITEMS".to_string()))?,
            None => DEFAULT_MAX_ITEMS,
        };

        let log_filter = lookup("TALLY_LOG")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());

        Ok(TallyConfig {
            max_items,
            log_filter,
        })
    }

    /// Request limits derived from this configuration.
    pub fn limits(&self) -> Result<CheckoutLimits, ConfigError> {
        CheckoutLimits::new(self.max_items)
            .map_err(|_| ConfigError::InvalidValue("TALLY_MAX_ITEMS".to_string()))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = TallyConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.max_items, DEFAULT_MAX_ITEMS);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.limits().unwrap().max_items(), DEFAULT_MAX_ITEMS);
    }

    #[test]
    fn test_overrides() {
        let config =
            TallyConfig::from_lookup(lookup(&[("TALLY_MAX_ITEMS", " 25 "), ("TALLY_LOG", "debug")]))
                .unwrap();
        assert_eq!(config.max_items, 25);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_invalid_max_items() {
        for raw in ["0", "-1", "lots", ""] {
            let err = TallyConfig::from_lookup(lookup(&[("TALLY_MAX_ITEMS", raw)])).unwrap_err();
            assert_eq!(err.to_string(), "Invalid value for TALLY_MAX_ITEMS");
        }
    }
}
