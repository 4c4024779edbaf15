use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// What a write does when the remote backend fails after connecting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteFallback {
    /// Apply the write to the local cache instead.
    #[default]
    Cache,
    /// Return `StoreError::BackendUnavailable` and leave the cache untouched.
    Surface,
}

impl WriteFallback {
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteFallback::Cache => "cache",
            WriteFallback::Surface => "surface",
        }
    }
}

impl fmt::Display for WriteFallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid write fallback {0:?} (expected \"cache\" or \"surface\")")]
pub struct ParseWriteFallbackError(String);

impl FromStr for WriteFallback {
    type Err = ParseWriteFallbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cache" => Ok(WriteFallback::Cache),
            "surface" => Ok(WriteFallback::Surface),
            _ => Err(ParseWriteFallbackError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Cache".parse(), Ok(WriteFallback::Cache));
        assert_eq!(" surface ".parse(), Ok(WriteFallback::Surface));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "retry".parse::<WriteFallback>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid write fallback \"retry\" (expected \"cache\" or \"surface\")"
        );
    }

    #[test]
    fn test_default_is_cache() {
        assert_eq!(WriteFallback::default(), WriteFallback::Cache);
        assert_eq!(WriteFallback::default().to_string(), "cache");
    }
}
