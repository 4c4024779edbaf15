//! Connector for the in-memory remote backend.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use itinerary_core::storage::{OfflinePersistenceError, RemoteConnector, RepositoryError, Result};

use super::InMemoryRepository;

/// Hands out an [`InMemoryRepository`] as if it were a hosted backend.
#[derive(Debug, Clone)]
pub struct InMemoryConnector {
    repository: InMemoryRepository,
    configured: bool,
    offline_persistence: std::result::Result<(), OfflinePersistenceError>,
    connect_attempts: Arc<AtomicUsize>,
}

impl InMemoryConnector {
    /// Creates a configured connector for the given repository.
    pub fn new(repository: InMemoryRepository) -> Self {
        Self {
            repository,
            configured: true,
            offline_persistence: Ok(()),
            connect_attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Creates a connector whose credentials are missing.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new(InMemoryRepository::new())
        }
    }

    /// Sets the outcome of enabling offline persistence.
    pub fn with_offline_persistence(
        mut self,
        outcome: std::result::Result<(), OfflinePersistenceError>,
    ) -> Self {
        self.offline_persistence = outcome;
        self
    }

    /// The repository handed out on connect.
    pub fn repository(&self) -> &InMemoryRepository {
        &self.repository
    }

    /// Number of times `connect` has been called.
    pub fn connect_attempts(&self) -> usize {
        self.connect_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RemoteConnector for InMemoryConnector {
    type Backend = InMemoryRepository;

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn connect(&self) -> Result<InMemoryRepository> {
        self.connect_attempts.fetch_add(1, Ordering::SeqCst);
        if !self.repository.is_available() {
            return Err(RepositoryError::ConnectionFailed(
                "in-memory remote is unreachable".to_string(),
            ));
        }
        Ok(self.repository.clone())
    }

    async fn enable_offline_persistence(
        &self,
        _backend: &InMemoryRepository,
    ) -> std::result::Result<(), OfflinePersistenceError> {
        self.offline_persistence.clone()
    }
}
