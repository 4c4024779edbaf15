//! Lazy, init-once connection to the remote backend.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::OnceCell;

use itinerary_core::storage::{OfflinePersistenceError, RemoteConnector, StoreError};

/// The backend a store operation should run against.
#[derive(Debug)]
pub enum Backend<R> {
    /// The remote backend is connected.
    Remote(Arc<R>),
    /// The remote backend is unconfigured or unreachable.
    Local,
}

impl<R> Backend<R> {
    pub fn is_remote(&self) -> bool {
        matches!(self, Backend::Remote(_))
    }
}

/// Owns a [`RemoteConnector`] and the connection it produces.
///
/// A successful connection is kept for the lifetime of the handle. Failed
/// attempts are not memoized and are retried on the next call; an
/// unconfigured connector never attempts to connect.
pub struct RemoteHandle<C: RemoteConnector> {
    connector: C,
    backend: OnceCell<Arc<C::Backend>>,
    unconfigured_logged: AtomicBool,
}

impl<C: RemoteConnector> RemoteHandle<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            backend: OnceCell::new(),
            unconfigured_logged: AtomicBool::new(false),
        }
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Returns true once a connection has been established.
    pub fn is_ready(&self) -> bool {
        self.backend.initialized()
    }

    /// Returns true if the remote backend is usable, connecting if needed.
    ///
    /// Never fails; every failure is logged and collapses to `false`.
    pub async fn ensure_remote_ready(&self) -> bool {
        self.remote().await.is_ok()
    }

    /// Picks the backend for the next operation.
    pub async fn select(&self) -> Backend<C::Backend> {
        match self.remote().await {
            Ok(remote) => Backend::Remote(remote),
            Err(_) => Backend::Local,
        }
    }

    /// Returns the connected remote backend, connecting on first use.
    pub async fn remote(&self) -> Result<Arc<C::Backend>, StoreError> {
        if let Some(backend) = self.backend.get() {
            return Ok(Arc::clone(backend));
        }

        if !self.connector.is_configured() {
            if !self.unconfigured_logged.swap(true, Ordering::Relaxed) {
                tracing::info!("Remote storage not configured, using local cache");
            }
            return Err(StoreError::RemoteUnconfigured);
        }

        let backend = self
            .backend
            .get_or_try_init(|| async {
                let backend = self.connector.connect().await.map_err(|err| {
                    tracing::error!(error = %err, "Failed to connect to remote storage");
                    StoreError::BackendUnavailable
                })?;

                match self.connector.enable_offline_persistence(&backend).await {
                    Ok(()) => tracing::info!("Offline persistence enabled"),
                    Err(OfflinePersistenceError::FailedPrecondition) => {
                        tracing::warn!("Offline persistence failed: another session holds it")
                    }
                    Err(err) => tracing::warn!(error = %err, "Offline persistence not enabled"),
                }

                tracing::info!("Connected to remote storage");
                Ok::<_, StoreError>(Arc::new(backend))
            })
            .await?;

        Ok(Arc::clone(backend))
    }
}
