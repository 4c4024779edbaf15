use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use itinerary_core::cache::{deserialize_holidays, serialize_holidays, Cache, HOLIDAYS_KEY};
use itinerary_core::holiday::{
    generate_local_id, is_valid_holiday_id, sort_by_outbound_date, HolidayDetails, HolidayRecord,
};
use itinerary_core::storage::{HolidayRepository, RepositoryError, Result};

/// Holiday repository over a single key of a key-value cache.
///
/// Every call is a read-modify-write of the whole list; a single writer per
/// cache is assumed.
pub struct LocalCacheBackend<K: Cache> {
    cache: Arc<K>,
}

impl<K: Cache> Clone for LocalCacheBackend<K> {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<K: Cache> LocalCacheBackend<K> {
    pub fn new(cache: Arc<K>) -> Self {
        Self { cache }
    }

    /// Loads the cached list. A missing or unparseable payload reads as empty.
    async fn load(&self) -> Result<Vec<HolidayRecord>> {
        let bytes = match self.cache.get(HOLIDAYS_KEY).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Ok(Vec::new()),
            Err(err) => return Err(RepositoryError::QueryFailed(err.to_string())),
        };

        match deserialize_holidays(&bytes) {
            Ok(holidays) => Ok(holidays),
            Err(err) => {
                tracing::warn!(error = %err, "Cached holidays are corrupt, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, holidays: &[HolidayRecord]) -> Result<()> {
        let bytes = serialize_holidays(holidays)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        self.cache
            .set(HOLIDAYS_KEY, &bytes)
            .await
            .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Replaces the whole cached list (mirror of the remote backend).
    pub async fn replace_all(&self, holidays: &[HolidayRecord]) -> Result<()> {
        self.save(holidays).await?;
        tracing::trace!(count = holidays.len(), "Local cache replaced");
        Ok(())
    }
}

fn check_id(id: &str) -> Result<()> {
    if is_valid_holiday_id(id) {
        Ok(())
    } else {
        Err(RepositoryError::InvalidIdentifier(id.to_string()))
    }
}

#[async_trait]
impl<K: Cache + 'static> HolidayRepository for LocalCacheBackend<K> {
    async fn list_holidays(&self) -> Result<Vec<HolidayRecord>> {
        let mut holidays = self.load().await?;
        sort_by_outbound_date(&mut holidays);
        Ok(holidays)
    }

    async fn get_holiday(&self, id: &str) -> Result<Option<HolidayRecord>> {
        check_id(id)?;
        let holidays = self.load().await?;
        Ok(holidays.into_iter().find(|h| h.id == id))
    }

    async fn create_holiday(
        &self,
        details: &HolidayDetails,
        created_at: DateTime<Utc>,
    ) -> Result<String> {
        let mut holidays = self.load().await?;

        let mut id = generate_local_id();
        while holidays.iter().any(|h| h.id == id) {
            id = generate_local_id();
        }

        holidays.push(HolidayRecord::new(id.clone(), details.clone(), created_at));
        self.save(&holidays).await?;

        tracing::debug!(holiday_id = %id, "Holiday created in local cache");
        Ok(id)
    }

    async fn update_holiday(
        &self,
        id: &str,
        changes: &HolidayDetails,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        check_id(id)?;
        let mut holidays = self.load().await?;

        let Some(holiday) = holidays.iter_mut().find(|h| h.id == id) else {
            tracing::debug!(holiday_id = %id, "Holiday not in local cache, update skipped");
            return Ok(());
        };

        holiday.apply_update(changes.clone(), updated_at);
        self.save(&holidays).await?;

        tracing::debug!(holiday_id = %id, "Holiday updated in local cache");
        Ok(())
    }

    async fn delete_holiday(&self, id: &str) -> Result<()> {
        check_id(id)?;
        let mut holidays = self.load().await?;

        let before = holidays.len();
        holidays.retain(|h| h.id != id);
        if holidays.len() != before {
            self.save(&holidays).await?;
        }

        tracing::debug!(holiday_id = %id, "Holiday deleted from local cache");
        Ok(())
    }
}
