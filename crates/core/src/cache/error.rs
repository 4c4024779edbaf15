use thiserror::Error;

/// Failures of the key-value store behind the local cache.
///
/// A corrupt payload is not a `CacheError`: the store returns the bytes and
/// the local backend decides how to read them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// The store could not be opened, or its handle was closed.
    #[error("Cache store unavailable: {0}")]
    Unavailable(String),
    /// A read or write against an open store failed (disk full, locked, ...).
    #[error("Cache operation failed: {0}")]
    OperationFailed(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let error = CacheError::Unavailable("itinerary.db: permission denied".to_string());
        assert_eq!(
            error.to_string(),
            "Cache store unavailable: itinerary.db: permission denied"
        );
    }

    #[test]
    fn test_operation_failed_display() {
        let error = CacheError::OperationFailed("database is locked".to_string());
        assert_eq!(error.to_string(), "Cache operation failed: database is locked");
    }
}
