use async_trait::async_trait;

use super::Result;

/// A persistent key-addressed byte store.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value, replacing any previous one.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Deletes a value by key.
    async fn delete(&self, key: &str) -> Result<()>;
}
