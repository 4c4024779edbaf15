use std::sync::Arc;

use chrono::Utc;

use itinerary_core::cache::Cache;
use itinerary_core::holiday::{
    is_valid_holiday_id, validate_details, HolidayDetails, HolidayRecord, Sanitize,
};
use itinerary_core::storage::{
    HolidayRepository, RemoteConnector, RepositoryError, StoreError,
};

use crate::storage::local::LocalCacheBackend;
use crate::storage::remote::{Backend, RemoteHandle};

use super::WriteFallback;

/// Holiday store over a remote backend with a local cache fallback.
///
/// - **Reads**: served by the remote backend when it is connected, and the
///   result replaces the local cache. Any remote failure is answered from
///   the cache instead.
/// - **Writes**: sanitized and validated first, then sent to the remote
///   backend with the cache refreshed afterwards. When the remote backend is
///   unconfigured the write goes to the cache. When it fails, the
///   [`WriteFallback`] policy decides.
///
/// # Type Parameters
///
/// * `C` - The remote connector
/// * `K` - The key-value store behind the local cache
pub struct HolidayStore<C, K>
where
    C: RemoteConnector,
    K: Cache,
{
    remote: RemoteHandle<C>,
    local: LocalCacheBackend<K>,
    write_fallback: WriteFallback,
}

impl<C, K> HolidayStore<C, K>
where
    C: RemoteConnector,
    K: Cache + 'static,
{
    /// Creates a new store. No connection is attempted until first use.
    pub fn new(connector: C, cache: Arc<K>, write_fallback: WriteFallback) -> Self {
        Self {
            remote: RemoteHandle::new(connector),
            local: LocalCacheBackend::new(cache),
            write_fallback,
        }
    }

    pub fn remote(&self) -> &RemoteHandle<C> {
        &self.remote
    }

    /// Gets every holiday, ordered by outbound date.
    ///
    /// Never fails: when both backends fail the result is empty.
    pub async fn get_all(&self) -> Vec<HolidayRecord> {
        if let Backend::Remote(remote) = self.remote.select().await {
            match remote.list_holidays().await {
                Ok(holidays) => {
                    if let Err(err) = self.local.replace_all(&holidays).await {
                        tracing::warn!(error = %err, "Failed to mirror holidays into local cache");
                    }
                    return holidays;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "Failed to list remote holidays, using local cache");
                }
            }
        }

        match self.local.list_holidays().await {
            Ok(holidays) => holidays,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read local cache");
                Vec::new()
            }
        }
    }

    /// Creates a holiday and returns its identifier.
    ///
    /// Remote identifiers are UUIDs; local ones start with `h_`.
    pub async fn create(&self, details: HolidayDetails) -> Result<String, StoreError> {
        let details = prepare(details)?;
        let created_at = Utc::now();

        if let Backend::Remote(remote) = self.remote.select().await {
            match remote.create_holiday(&details, created_at).await {
                Ok(id) => {
                    tracing::debug!(holiday_id = %id, "Holiday created");
                    self.refresh_cache().await;
                    return Ok(id);
                }
                Err(err) => self.remote_write_failed("add", &err)?,
            }
        }

        self.local
            .create_holiday(&details, created_at)
            .await
            .map_err(|err| local_write_failed("add", &err))
    }

    /// Merges the supplied fields into an existing holiday.
    pub async fn update(&self, id: &str, changes: HolidayDetails) -> Result<(), StoreError> {
        check_id(id)?;
        let changes = prepare(changes)?;
        let updated_at = Utc::now();

        if let Backend::Remote(remote) = self.remote.select().await {
            match remote.update_holiday(id, &changes, updated_at).await {
                Ok(()) => {
                    tracing::debug!(holiday_id = %id, "Holiday updated");
                    self.refresh_cache().await;
                    return Ok(());
                }
                Err(RepositoryError::NotFound { .. })
                    if self.write_fallback == WriteFallback::Surface =>
                {
                    tracing::debug!(holiday_id = %id, "Holiday not found remotely, nothing updated");
                    return Ok(());
                }
                Err(err) => self.remote_write_failed("update", &err)?,
            }
        }

        self.local
            .update_holiday(id, &changes, updated_at)
            .await
            .map_err(|err| local_write_failed("update", &err))
    }

    /// Deletes a holiday. Unknown identifiers are not an error.
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        check_id(id)?;

        if let Backend::Remote(remote) = self.remote.select().await {
            match remote.delete_holiday(id).await {
                Ok(()) => {
                    tracing::debug!(holiday_id = %id, "Holiday deleted");
                    self.refresh_cache().await;
                    return Ok(());
                }
                Err(err) => self.remote_write_failed("delete", &err)?,
            }
        }

        self.local
            .delete_holiday(id)
            .await
            .map_err(|err| local_write_failed("delete", &err))
    }

    /// Gets a holiday by identifier.
    ///
    /// A remote "not found" is returned as `None`; only remote failures are
    /// answered from the cache.
    pub async fn get_one(&self, id: &str) -> Result<Option<HolidayRecord>, StoreError> {
        check_id(id)?;

        if let Backend::Remote(remote) = self.remote.select().await {
            match remote.get_holiday(id).await {
                Ok(holiday) => return Ok(holiday),
                Err(err) => {
                    tracing::warn!(holiday_id = %id, error = %err, "Failed to get remote holiday, using local cache");
                }
            }
        }

        self.local
            .get_holiday(id)
            .await
            .map_err(|err| local_write_failed("load", &err))
    }

    async fn refresh_cache(&self) {
        let holidays = self.get_all().await;
        tracing::trace!(count = holidays.len(), "Local cache refreshed");
    }

    fn remote_write_failed(
        &self,
        action: &'static str,
        err: &RepositoryError,
    ) -> Result<(), StoreError> {
        match self.write_fallback {
            WriteFallback::Cache => {
                tracing::warn!(action, error = %err, "Remote write failed, writing to local cache");
                Ok(())
            }
            WriteFallback::Surface if err.is_unavailable() => {
                tracing::error!(action, error = %err, "Remote backend unavailable");
                Err(StoreError::BackendUnavailable)
            }
            WriteFallback::Surface => {
                tracing::error!(action, error = %err, "Remote write failed");
                Err(StoreError::PersistenceFailed { action })
            }
        }
    }
}

fn check_id(id: &str) -> Result<(), StoreError> {
    if is_valid_holiday_id(id) {
        Ok(())
    } else {
        Err(StoreError::InvalidIdentifier)
    }
}

/// Sanitizes every string field, then checks the date fields.
fn prepare(details: HolidayDetails) -> Result<HolidayDetails, StoreError> {
    let details = details.sanitized();
    validate_details(&details).map_err(|err| StoreError::InvalidData(err.to_string()))?;
    Ok(details)
}

fn local_write_failed(action: &'static str, err: &RepositoryError) -> StoreError {
    tracing::error!(action, error = %err, "Local cache operation failed");
    StoreError::PersistenceFailed { action }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;
    use itinerary_core::cache::{CacheError, HOLIDAYS_KEY};
    use itinerary_core::holiday::{is_local_id, Activity, Hotel};

    use super::*;
    use crate::cache::MemoryCache;
    use crate::storage::inmemory::{InMemoryConnector, InMemoryRepository};

    /// Memory cache that counts calls and can be switched to fail.
    #[derive(Default)]
    struct CountingCache {
        inner: MemoryCache,
        calls: AtomicUsize,
        failing: AtomicBool,
    }

    impl CountingCache {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        fn check(&self) -> itinerary_core::cache::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.load(Ordering::SeqCst) {
                Err(CacheError::OperationFailed("quota exceeded".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[async_trait]
    impl Cache for CountingCache {
        async fn get(&self, key: &str) -> itinerary_core::cache::Result<Option<Vec<u8>>> {
            self.check()?;
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &[u8]) -> itinerary_core::cache::Result<()> {
            self.check()?;
            self.inner.set(key, value).await
        }

        async fn delete(&self, key: &str) -> itinerary_core::cache::Result<()> {
            self.check()?;
            self.inner.delete(key).await
        }
    }

    type TestStore = HolidayStore<InMemoryConnector, CountingCache>;

    fn remote_store(policy: WriteFallback) -> (TestStore, InMemoryRepository, Arc<CountingCache>) {
        let repo = InMemoryRepository::new();
        let cache = Arc::new(CountingCache::default());
        let store = HolidayStore::new(
            InMemoryConnector::new(repo.clone()),
            Arc::clone(&cache),
            policy,
        );
        (store, repo, cache)
    }

    fn local_store() -> (TestStore, Arc<CountingCache>) {
        let cache = Arc::new(CountingCache::default());
        let store = HolidayStore::new(
            InMemoryConnector::unconfigured(),
            Arc::clone(&cache),
            WriteFallback::Cache,
        );
        (store, cache)
    }

    fn rome() -> HolidayDetails {
        HolidayDetails::new("Rome")
            .with_outbound("London", "Rome", "2025-06-01")
            .with_return("Rome", "London", "2025-06-08")
    }

    async fn cached_ids(cache: &CountingCache) -> Vec<String> {
        let local = LocalCacheBackend::new(Arc::new(cache.inner.clone()));
        local
            .list_holidays()
            .await
            .unwrap()
            .into_iter()
            .map(|h| h.id)
            .collect()
    }

    #[tokio::test]
    async fn test_create_then_get_one_remote() {
        let (store, _, _) = remote_store(WriteFallback::Cache);

        let id = store.create(rome()).await.unwrap();
        let holiday = store.get_one(&id).await.unwrap().unwrap();

        assert_eq!(holiday.id, id);
        assert!(!is_local_id(&id));
        assert_eq!(holiday.details, rome());
        assert!(holiday.created_at.is_some());
    }

    #[tokio::test]
    async fn test_create_then_get_one_local() {
        let (store, _) = local_store();

        let id = store.create(rome()).await.unwrap();
        let holiday = store.get_one(&id).await.unwrap().unwrap();

        assert!(is_local_id(&id));
        assert_eq!(holiday.details, rome());
        assert!(holiday.created_at.is_some());
    }

    #[tokio::test]
    async fn test_create_sanitizes_nested_fields() {
        let (store, _, _) = remote_store(WriteFallback::Cache);
        let details = HolidayDetails::new("Paris!! <script>")
            .with_hotels(vec![Hotel::new("O'Hare, Chicago")])
            .with_activities(vec![Activity::new("Louvre <b>", "")]);

        let id = store.create(details).await.unwrap();
        let holiday = store.get_one(&id).await.unwrap().unwrap();

        assert_eq!(holiday.display_name(), "Paris script");
        assert_eq!(holiday.hotels()[0].name, "OHare Chicago");
        assert_eq!(holiday.activities()[0].description, "Louvre b");
    }

    #[tokio::test]
    async fn test_remote_writes_refresh_cache() {
        let (store, _, cache) = remote_store(WriteFallback::Cache);

        let id = store.create(rome()).await.unwrap();
        assert_eq!(cached_ids(&cache).await, vec![id.clone()]);

        store.delete(&id).await.unwrap();
        assert!(cached_ids(&cache).await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_ids_fail_without_io() {
        let (store, _, cache) = remote_store(WriteFallback::Cache);

        for id in ["", "undefined", "null"] {
            assert_eq!(
                store.update(id, HolidayDetails::new("x")).await,
                Err(StoreError::InvalidIdentifier)
            );
            assert_eq!(store.delete(id).await, Err(StoreError::InvalidIdentifier));
            assert_eq!(store.get_one(id).await, Err(StoreError::InvalidIdentifier));
        }

        assert_eq!(store.remote().connector().connect_attempts(), 0);
        assert_eq!(cache.calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_date_fails_without_io() {
        let (store, _, cache) = remote_store(WriteFallback::Cache);
        let details = HolidayDetails::new("Rome").with_outbound("A", "B", "next week");

        let result = store.create(details).await;

        assert!(matches!(result, Err(StoreError::InvalidData(_))));
        assert_eq!(store.remote().connector().connect_attempts(), 0);
        assert_eq!(cache.calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_then_absent() {
        for (store, _) in [
            {
                let (store, _, cache) = remote_store(WriteFallback::Cache);
                (store, cache)
            },
            local_store(),
        ] {
            let id = store.create(rome()).await.unwrap();
            store.delete(&id).await.unwrap();

            assert_eq!(store.get_one(&id).await.unwrap(), None);
            assert!(store.get_all().await.iter().all(|h| h.id != id));
        }
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_ok() {
        let (remote, _, _) = remote_store(WriteFallback::Cache);
        let (local, _) = local_store();

        assert!(remote.delete("no-such-holiday").await.is_ok());
        assert!(local.delete("no-such-holiday").await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_remote_serves_last_cache() {
        let (store, repo, _) = remote_store(WriteFallback::Cache);
        let id = store.create(rome()).await.unwrap();
        assert_eq!(store.get_all().await.len(), 1);

        repo.set_available(false);

        let holidays = store.get_all().await;
        assert_eq!(holidays.len(), 1);
        assert_eq!(holidays[0].id, id);
    }

    #[tokio::test]
    async fn test_unreachable_remote_never_cached_is_empty() {
        let (store, repo, _) = remote_store(WriteFallback::Cache);
        repo.set_available(false);

        assert!(store.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_all_never_fails_when_both_backends_fail() {
        let (store, repo, cache) = remote_store(WriteFallback::Cache);
        repo.set_available(false);
        cache.set_failing(true);

        assert!(store.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_notes_newline_round_trip() {
        let (store, _, _) = remote_store(WriteFallback::Cache);
        let id = store.create(rome()).await.unwrap();

        store
            .update(&id, HolidayDetails::default().with_notes("line1\nline2"))
            .await
            .unwrap();

        let holiday = store.get_one(&id).await.unwrap().unwrap();
        assert_eq!(holiday.details.other_notes.as_deref(), Some("line1\nline2"));
        assert_eq!(holiday.display_name(), "Rome");
        assert!(holiday.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_hotel_scenario() {
        let (store, _) = local_store();
        let details = HolidayDetails::new("Lisbon")
            .with_hotels(vec![Hotel::new("Hotel A")
                .with_stay("2025-01-01", "2025-01-05")
                .with_address("1 Main St")])
            .with_activities(Vec::new());

        let id = store.create(details).await.unwrap();
        let holiday = store.get_one(&id).await.unwrap().unwrap();

        assert_eq!(
            holiday.hotels(),
            [Hotel {
                name: "Hotel A".to_string(),
                check_in: "2025-01-01".to_string(),
                check_out: "2025-01-05".to_string(),
                address: "1 Main St".to_string(),
            }]
        );
        assert_eq!(holiday.details.activities.as_ref().map(Vec::len), Some(0));
    }

    #[tokio::test]
    async fn test_remote_write_failure_falls_back_to_cache() {
        let (store, repo, _) = remote_store(WriteFallback::Cache);
        assert!(store.remote().ensure_remote_ready().await);
        repo.set_available(false);

        let id = store.create(rome()).await.unwrap();

        assert!(is_local_id(&id));
        assert!(store.get_one(&id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_surface_policy_returns_backend_unavailable() {
        let (store, repo, cache) = remote_store(WriteFallback::Surface);
        assert!(store.remote().ensure_remote_ready().await);
        repo.set_available(false);

        assert_eq!(
            store.create(rome()).await,
            Err(StoreError::BackendUnavailable)
        );
        assert_eq!(
            store.delete("some-id").await,
            Err(StoreError::BackendUnavailable)
        );
        assert_eq!(cache.inner.get(HOLIDAYS_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_surface_policy_update_of_missing_holiday_is_noop() {
        let (store, _, cache) = remote_store(WriteFallback::Surface);

        assert_eq!(
            store.update("no-such-id", HolidayDetails::new("x")).await,
            Ok(())
        );
        assert!(store.get_all().await.is_empty());
        assert!(cached_ids(&cache).await.is_empty());
    }

    #[tokio::test]
    async fn test_surface_policy_reports_rejected_writes_as_persistence_failed() {
        let (store, repo, cache) = remote_store(WriteFallback::Surface);
        let id = store.create(rome()).await.unwrap();
        repo.set_write_error(Some(RepositoryError::QueryFailed(
            "conditional check failed".to_string(),
        )))
        .await;

        assert_eq!(
            store.create(rome()).await,
            Err(StoreError::PersistenceFailed { action: "add" })
        );
        assert_eq!(
            store.update(&id, HolidayDetails::new("Milan")).await,
            Err(StoreError::PersistenceFailed { action: "update" })
        );
        assert_eq!(
            store.delete(&id).await,
            Err(StoreError::PersistenceFailed { action: "delete" })
        );
        assert_eq!(cached_ids(&cache).await, vec![id]);
    }

    #[tokio::test]
    async fn test_cache_policy_writes_locally_after_rejected_remote_write() {
        let (store, repo, _) = remote_store(WriteFallback::Cache);
        repo.set_write_error(Some(RepositoryError::QueryFailed("throttled".to_string())))
            .await;

        let id = store.create(rome()).await.unwrap();
        assert!(is_local_id(&id));
    }

    #[tokio::test]
    async fn test_surface_policy_still_uses_cache_when_unconfigured() {
        let cache = Arc::new(CountingCache::default());
        let store = HolidayStore::new(
            InMemoryConnector::unconfigured(),
            Arc::clone(&cache),
            WriteFallback::Surface,
        );

        let id = store.create(rome()).await.unwrap();
        assert!(is_local_id(&id));
    }

    #[tokio::test]
    async fn test_remote_not_found_does_not_fall_back() {
        let (store, _, cache) = remote_store(WriteFallback::Cache);
        let stale = HolidayRecord::new("stale-id", rome(), Utc::now());
        LocalCacheBackend::new(Arc::new(cache.inner.clone()))
            .replace_all(&[stale])
            .await
            .unwrap();

        assert_eq!(store.get_one("stale-id").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remote_failure_get_one_falls_back() {
        let (store, repo, _) = remote_store(WriteFallback::Cache);
        let id = store.create(rome()).await.unwrap();

        repo.set_available(false);

        let holiday = store.get_one(&id).await.unwrap().unwrap();
        assert_eq!(holiday.id, id);
    }

    #[tokio::test]
    async fn test_local_failure_is_persistence_failed() {
        let (store, cache) = local_store();
        cache.set_failing(true);

        assert_eq!(
            store.create(rome()).await,
            Err(StoreError::PersistenceFailed { action: "add" })
        );
        assert_eq!(
            store.update("h_1_abc", rome()).await,
            Err(StoreError::PersistenceFailed { action: "update" })
        );
        assert_eq!(
            store.delete("h_1_abc").await,
            Err(StoreError::PersistenceFailed { action: "delete" })
        );
        assert_eq!(
            store.get_one("h_1_abc").await,
            Err(StoreError::PersistenceFailed { action: "load" })
        );
    }

    #[tokio::test]
    async fn test_update_merges_supplied_fields_only() {
        let (store, _) = local_store();
        let id = store
            .create(rome().with_hotels(vec![Hotel::new("Hotel A")]))
            .await
            .unwrap();

        let changes = HolidayDetails {
            outbound_time: Some("09:45".to_string()),
            ..HolidayDetails::default()
        };
        store.update(&id, changes).await.unwrap();

        let holiday = store.get_one(&id).await.unwrap().unwrap();
        assert_eq!(holiday.details.outbound_time.as_deref(), Some("09:45"));
        assert_eq!(holiday.details.outbound_date.as_deref(), Some("2025-06-01"));
        assert_eq!(holiday.hotels().len(), 1);
    }
}
