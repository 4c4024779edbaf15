//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use itinerary_core::holiday::{
    is_valid_holiday_id, sort_by_outbound_date, HolidayDetails, HolidayRecord,
};
use itinerary_core::storage::{HolidayRepository, RepositoryError, Result};

/// In-memory storage backend for testing.
///
/// Clones share the same data and availability flag.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    holidays: Arc<RwLock<HashMap<String, HolidayRecord>>>,
    available: Arc<AtomicBool>,
    write_error: Arc<RwLock<Option<RepositoryError>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty, reachable repository.
    pub fn new() -> Self {
        Self {
            holidays: Arc::new(RwLock::new(HashMap::new())),
            available: Arc::new(AtomicBool::new(true)),
            write_error: Arc::new(RwLock::new(None)),
        }
    }

    /// Makes every subsequent call succeed or fail with `ConnectionFailed`.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    /// Makes every subsequent write fail with `error`, or succeed again on `None`.
    ///
    /// Reads are unaffected.
    pub async fn set_write_error(&self, error: Option<RepositoryError>) {
        *self.write_error.write().await = error;
    }

    async fn ensure_writable(&self) -> Result<()> {
        self.ensure_available()?;
        match self.write_error.read().await.clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn ensure_available(&self) -> Result<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(RepositoryError::ConnectionFailed(
                "in-memory remote is unreachable".to_string(),
            ))
        }
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
impl HolidayRepository for InMemoryRepository {
    async fn list_holidays(&self) -> Result<Vec<HolidayRecord>> {
        self.ensure_available()?;
        let mut holidays: Vec<HolidayRecord> =
            self.holidays.read().await.values().cloned().collect();
        // HashMap order is arbitrary; sort by id first so equal dates are stable.
        holidays.sort_by(|a, b| a.id.cmp(&b.id));
        sort_by_outbound_date(&mut holidays);
        Ok(holidays)
    }

    async fn get_holiday(&self, id: &str) -> Result<Option<HolidayRecord>> {
        check_id(id)?;
        self.ensure_available()?;
        Ok(self.holidays.read().await.get(id).cloned())
    }

    async fn create_holiday(
        &self,
        details: &HolidayDetails,
        created_at: DateTime<Utc>,
    ) -> Result<String> {
        self.ensure_writable().await?;
        let id = Uuid::new_v4().to_string();
        let record = HolidayRecord::new(id.clone(), details.clone(), created_at);
        self.holidays.write().await.insert(id.clone(), record);
        Ok(id)
    }

    async fn update_holiday(
        &self,
        id: &str,
        changes: &HolidayDetails,
        updated_at: DateTime<Utc>,
    ) -> Result<()> {
        check_id(id)?;
        self.ensure_writable().await?;
        let mut holidays = self.holidays.write().await;
        let Some(holiday) = holidays.get_mut(id) else {
            return Err(RepositoryError::NotFound {
                entity_type: "Holiday",
                id: id.to_string(),
            });
        };
        holiday.apply_update(changes.clone(), updated_at);
        Ok(())
    }

    async fn delete_holiday(&self, id: &str) -> Result<()> {
        check_id(id)?;
        self.ensure_writable().await?;
        self.holidays.write().await.remove(id);
        Ok(())
    }
}
