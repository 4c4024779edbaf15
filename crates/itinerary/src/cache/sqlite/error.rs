//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` to `CacheError` from `itinerary_core::cache`.

use itinerary_core::cache::CacheError;

/// Maps a tokio_rusqlite error to a CacheError.
///
/// # Error Mapping
///
/// - Closed connections and `SQLITE_CANTOPEN` → `CacheError::Unavailable`
/// - All other errors → `CacheError::OperationFailed`
pub fn map_tokio_rusqlite_error(err: tokio_rusqlite::Error) -> CacheError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, _))
            if sqlite_err.code == rusqlite::ErrorCode::CannotOpen =>
        {
            CacheError::Unavailable(format!("Cannot open database: {err}"))
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            CacheError::Unavailable("Connection closed unexpectedly".to_string())
        }
        _ => CacheError::OperationFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::ffi;

    #[test]
    fn test_cannot_open_maps_to_connection_failed() {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::CannotOpen,
            extended_code: ffi::SQLITE_CANTOPEN,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        assert!(matches!(
            map_tokio_rusqlite_error(err),
            CacheError::Unavailable(_)
        ));
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed);
        assert!(matches!(result, CacheError::Unavailable(_)));
    }

    #[test]
    fn test_disk_full_maps_to_operation_failed() {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::DiskFull,
            extended_code: ffi::SQLITE_FULL,
        };
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None));

        assert!(matches!(
            map_tokio_rusqlite_error(err),
            CacheError::OperationFailed(_)
        ));
    }

    #[test]
    fn test_other_error_maps_to_operation_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));
        assert!(matches!(
            map_tokio_rusqlite_error(err),
            CacheError::OperationFailed(_)
        ));
    }
}
