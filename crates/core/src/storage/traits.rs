use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::holiday::{HolidayDetails, HolidayRecord};

use super::{OfflinePersistenceError, Result};

/// Storage operations over holiday records.
///
/// Implemented by the remote backends and by the local cache backend, so the
/// store can drive either through the same five calls.
#[async_trait]
pub trait HolidayRepository: Send + Sync {
    /// Gets every holiday, ordered by outbound date ascending.
    async fn list_holidays(&self) -> Result<Vec<HolidayRecord>>;

    /// Gets a holiday by its ID. Unknown IDs yield `Ok(None)`.
    async fn get_holiday(&self, id: &str) -> Result<Option<HolidayRecord>>;

    /// Creates a holiday and returns the identifier the backend assigned.
    async fn create_holiday(
        &self,
        details: &HolidayDetails,
        created_at: DateTime<Utc>,
    ) -> Result<String>;

    /// Merges the supplied fields into an existing holiday.
    async fn update_holiday(
        &self,
        id: &str,
        changes: &HolidayDetails,
        updated_at: DateTime<Utc>,
    ) -> Result<()>;

    /// Deletes a holiday. Deleting an unknown ID is not an error.
    async fn delete_holiday(&self, id: &str) -> Result<()>;
}

/// Establishes connections to a remote holiday backend.
#[async_trait]
pub trait RemoteConnector: Send + Sync {
    /// The repository produced by a successful connection.
    type Backend: HolidayRepository + 'static;

    /// Returns false when credentials are missing or still placeholders.
    fn is_configured(&self) -> bool;

    /// Connects to the remote backend.
    async fn connect(&self) -> Result<Self::Backend>;

    /// Enables the client's offline persistence feature.
    async fn enable_offline_persistence(
        &self,
        _backend: &Self::Backend,
    ) -> std::result::Result<(), OfflinePersistenceError> {
        Err(OfflinePersistenceError::Unimplemented)
    }
}
