use std::env;

use crate::storage::WriteFallback;

/// Table name shipped in sample configuration; means "not configured".
pub const PLACEHOLDER_TABLE_NAME: &str = "YOUR_TABLE_NAME";

/// Returns true if `name` is a real table name rather than blank or the placeholder.
pub fn is_configured_table_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name != PLACEHOLDER_TABLE_NAME
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the SQLite cache file (default: "itinerary.db")
    pub cache_path: String,
    /// DynamoDB table holding the holidays (default: placeholder, unconfigured)
    pub dynamodb_table_name: String,
    /// What writes do when the remote backend fails (default: cache)
    pub write_fallback: WriteFallback,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `ITINERARY_CACHE_PATH` - SQLite cache path (default: "itinerary.db")
    /// - `DYNAMODB_TABLE_NAME` - DynamoDB table name (default: "YOUR_TABLE_NAME")
    /// - `ITINERARY_WRITE_FALLBACK` - `cache` or `surface` (default: `cache`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let write_fallback = match lookup("ITINERARY_WRITE_FALLBACK") {
            Some(value) => value.parse().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "Ignoring ITINERARY_WRITE_FALLBACK");
                WriteFallback::default()
            }),
            None => WriteFallback::default(),
        };

        Self {
            cache_path: lookup("ITINERARY_CACHE_PATH").unwrap_or_else(|| "itinerary.db".to_string()),
            dynamodb_table_name: lookup("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|| PLACEHOLDER_TABLE_NAME.to_string()),
            write_fallback,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = config_from(&[]);

        assert_eq!(config.cache_path, "itinerary.db");
        assert_eq!(config.dynamodb_table_name, PLACEHOLDER_TABLE_NAME);
        assert_eq!(config.write_fallback, WriteFallback::Cache);
        assert!(!is_configured_table_name(&config.dynamodb_table_name));
    }

    #[test]
    fn test_values_from_environment() {
        let config = config_from(&[
            ("ITINERARY_CACHE_PATH", "/tmp/trips.db"),
            ("DYNAMODB_TABLE_NAME", "holidays"),
            ("ITINERARY_WRITE_FALLBACK", "surface"),
        ]);

        assert_eq!(config.cache_path, "/tmp/trips.db");
        assert_eq!(config.write_fallback, WriteFallback::Surface);
        assert!(is_configured_table_name(&config.dynamodb_table_name));
    }

    #[test]
    fn test_invalid_write_fallback_uses_default() {
        let config = config_from(&[("ITINERARY_WRITE_FALLBACK", "sometimes")]);
        assert_eq!(config.write_fallback, WriteFallback::Cache);
    }

    #[test]
    fn test_blank_table_name_is_unconfigured() {
        let config = config_from(&[("DYNAMODB_TABLE_NAME", "  ")]);
        assert!(!is_configured_table_name(&config.dynamodb_table_name));
    }
}
