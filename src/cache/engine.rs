//! Cache Engine Module
//!
//! Shared, lock-guarded handle to a `CacheStore`. Every operation that can
//! mutate the map, `get` included, takes the write lock, so capacity checks,
//! evictions and expiry purges are atomic with respect to other requests.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::cache::{CacheStats, CacheStore, Ttl};
use crate::config::Config;
use crate::error::Result;

// == Cache Engine ==
/// Cloneable handle to one cache instance.
#[derive(Debug, Clone)]
pub struct CacheEngine {
    store: Arc<RwLock<CacheStore>>,
}

impl CacheEngine {
    pub fn new(store: CacheStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Creates an engine sized and configured from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(CacheStore::new(
            config.memory_slots,
            config.memory_ttl,
            config.eviction_policy,
        ))
    }

    // == Put ==
    /// Stores `data` under `key`. See [`CacheStore::put`].
    pub async fn put(
        &self,
        key: impl Into<String>,
        data: impl Into<String>,
        ttl: Ttl,
    ) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key.into(), data.into(), ttl)
    }

    // == Get ==
    /// Write lock: a lookup may purge an expired entry.
    pub async fn get(&self, key: &str) -> Result<String> {
        let mut store = self.store.write().await;
        store.get(key)
    }

    // == Delete ==
    pub async fn delete(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.delete(key)
    }

    pub async fn has_key(&self, key: &str) -> bool {
        self.store.read().await.has_key(key)
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }
}
