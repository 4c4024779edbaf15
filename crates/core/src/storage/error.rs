use thiserror::Error;

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Invalid holiday ID: {0:?}")]
    InvalidIdentifier(String),
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl RepositoryError {
    /// Returns true if the backend could not be reached at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, RepositoryError::ConnectionFailed(_))
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Reasons the remote client's offline persistence could not be enabled.
///
/// None of these are fatal: the remote backend stays usable without it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OfflinePersistenceError {
    #[error("Offline persistence unavailable: another session holds it")]
    FailedPrecondition,
    #[error("Offline persistence is not supported by this backend")]
    Unimplemented,
    #[error("Offline persistence failed: {0}")]
    Other(String),
}

/// Errors surfaced by the holiday store to its callers.
///
/// Messages are short and human-readable; backend error details are logged,
/// never returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid holiday ID")]
    InvalidIdentifier,
    #[error("Remote storage is not configured")]
    RemoteUnconfigured,
    #[error("Remote storage is unavailable. Please try again.")]
    BackendUnavailable,
    #[error("Failed to {action} holiday. Please try again.")]
    PersistenceFailed { action: &'static str },
    #[error("Invalid holiday data: {0}")]
    InvalidData(String),
}
