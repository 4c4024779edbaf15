//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use itinerary_core::cache::{Cache, Result};

/// In-memory cache implementation.
///
/// Thread-safe store using `Arc<RwLock<HashMap>>`. Clones share the same
/// data, which lets tests inspect what a backend wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryCache {
    /// Creates a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.store.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::new();
        cache.set("key1", b"value1").await.unwrap();

        let result = cache.get("key1").await.unwrap();
        assert_eq!(result, Some(b"value1".to_vec()));
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let cache = MemoryCache::new();
        cache.set("key1", b"old").await.unwrap();
        cache.set("key1", b"new").await.unwrap();

        assert_eq!(cache.get("key1").await.unwrap(), Some(b"new".to_vec()));
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = MemoryCache::new();
        cache.set("key1", b"value1").await.unwrap();
        cache.delete("key1").await.unwrap();

        assert_eq!(cache.get("key1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clones_share_data() {
        let cache = MemoryCache::new();
        let other = cache.clone();
        cache.set("key1", b"value1").await.unwrap();

        assert_eq!(other.get("key1").await.unwrap(), Some(b"value1".to_vec()));
    }
}
