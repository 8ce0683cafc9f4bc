//! Configuration management for booking validation.
//!
//! Loads configuration from environment variables with defaults that match
//! the stock validation rules.

use crate::types::NameLengthMode;
use serde::{Deserialize, Serialize};
use std::env;

/// Minimum length of each name part
pub const DEFAULT_MIN_NAME_LENGTH: usize = 2;

/// Tickets on sale when nothing else is configured
pub const DEFAULT_TOTAL_TICKETS: u32 = 50;

/// Rules applied by the [`InputValidator`](crate::InputValidator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Minimum length of first and last name
    pub min_name_length: usize,
    /// How name length is measured
    pub name_length_mode: NameLengthMode,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            min_name_length: DEFAULT_MIN_NAME_LENGTH,
            name_length_mode: NameLengthMode::Bytes,
        }
    }
}

impl ValidatorConfig {
    /// Load validator rules from environment variables.
    ///
    /// Missing or unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load validator rules from an arbitrary key lookup.
    ///
    /// Same keys and fallbacks as [`from_env`](Self::from_env).
    #[must_use]
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            min_name_length: get("BOOKING_MIN_NAME_LENGTH")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MIN_NAME_LENGTH),
            name_length_mode: get("BOOKING_NAME_LENGTH_MODE")
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }
}

/// Application configuration for the booking demo.
///
/// Logging is configured separately through `RUST_LOG`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Validation rules
    pub validator: ValidatorConfig,
    /// Tickets on sale at startup
    pub total_tickets: u32,
}

impl Config {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Missing or unparseable values fall back to the defaults.
    #[must_use]
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            validator: ValidatorConfig::from_lookup(&get),
            total_tickets: get("BOOKING_TOTAL_TICKETS")
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TOTAL_TICKETS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn missing_vars_use_defaults() {
        let config = Config::from_lookup(lookup(&[]));
        assert_eq!(config.validator, ValidatorConfig::default());
        assert_eq!(config.total_tickets, DEFAULT_TOTAL_TICKETS);
    }

    #[test]
    fn unparseable_vars_use_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("BOOKING_MIN_NAME_LENGTH", "abc"),
            ("BOOKING_NAME_LENGTH_MODE", "graphemes"),
            ("BOOKING_TOTAL_TICKETS", "-1"),
        ]));
        assert_eq!(config.validator.min_name_length, DEFAULT_MIN_NAME_LENGTH);
        assert_eq!(config.validator.name_length_mode, NameLengthMode::Bytes);
        assert_eq!(config.total_tickets, DEFAULT_TOTAL_TICKETS);
    }

    #[test]
    fn valid_vars_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("BOOKING_MIN_NAME_LENGTH", "3"),
            ("BOOKING_NAME_LENGTH_MODE", "Chars"),
            ("BOOKING_TOTAL_TICKETS", "120"),
        ]));
        assert_eq!(config.validator.min_name_length, 3);
        assert_eq!(config.validator.name_length_mode, NameLengthMode::Chars);
        assert_eq!(config.total_tickets, 120);
    }

    #[test]
    fn default_matches_stock_rules() {
        let config = ValidatorConfig::default();
        assert_eq!(config.min_name_length, 2);
        assert_eq!(config.name_length_mode, NameLengthMode::Bytes);
    }

    #[test]
    fn config_deserializes_lowercase_mode() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"min_name_length":3,"name_length_mode":"chars"}"#)
                .unwrap();
        assert_eq!(config.min_name_length, 3);
        assert_eq!(config.name_length_mode, NameLengthMode::Chars);
    }
}
