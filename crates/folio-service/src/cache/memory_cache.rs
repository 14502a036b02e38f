//! In-process cache implementation.

use super::CacheInterface;
use folio_core::FolioResult;
use async_trait::async_trait;
use parking_lot::Mutex;
use shaku::Component;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::debug;

struct CacheEntry {
    value: String,
    expires_at: Instant,
    tags: Vec<String>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-process cache backed by a mutex-guarded map.
///
/// Expiry is lazy: an expired entry stays in the map until it is looked up
/// or swept by a tag invalidation. Suitable for single-instance deployments;
/// multi-instance setups should use the Redis backend instead.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct MemoryCacheService {
    #[shaku(default)]
    store: Mutex<HashMap<String, CacheEntry>>,
}

impl MemoryCacheService {
    /// Creates an empty in-process cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }
}

impl Default for MemoryCacheService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheInterface for MemoryCacheService {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> FolioResult<Option<String>> {
        let mut store = self.store.lock();
        match store.get(key) {
            Some(entry) if entry.is_expired() => {
                store.remove(key);
                debug!("Cache miss (expired) for key '{}'", key);
                Ok(None)
            }
            Some(entry) => {
                debug!("Cache hit for key '{}'", key);
                Ok(Some(entry.value.clone()))
            }
            None => {
                debug!("Cache miss for key '{}'", key);
                Ok(None)
            }
        }
    }

    async fn set_raw(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
        tags: &[&str],
    ) -> FolioResult<()> {
        let entry = CacheEntry {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        };
        self.store.lock().insert(key.to_string(), entry);
        debug!("Cached key '{}' with TTL {}s", key, ttl.as_secs());
        Ok(())
    }

    async fn delete(&self, key: &str) -> FolioResult<bool> {
        Ok(self.store.lock().remove(key).is_some())
    }

    async fn exists(&self, key: &str) -> FolioResult<bool> {
        let mut store = self.store.lock();
        match store.get(key) {
            Some(entry) if entry.is_expired() => {
                store.remove(key);
                Ok(false)
            }
            Some(_) => Ok(true),
            None => Ok(false),
        }
    }

    async fn invalidate_tags(&self, tags: &[&str]) -> FolioResult<u64> {
        let mut store = self.store.lock();
        let before = store.len();
        store.retain(|_, entry| !entry.tags.iter().any(|t| tags.contains(&t.as_str())));
        let evicted = (before - store.len()) as u64;
        debug!("Invalidated {} entries for tags {:?}", evicted, tags);
        Ok(evicted)
    }
}
