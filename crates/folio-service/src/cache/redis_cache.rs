//! Redis-based cache implementation.

use super::CacheInterface;
use folio_core::{FolioError, FolioResult};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Redis key holding the member set for a tag.
fn tag_set_key(tag: &str) -> String {
    format!("folio:tag:{}", tag)
}

/// Redis-based cache service with tag index sets.
///
/// Each tag maps to a Redis set of the keys labeled with it; invalidating a
/// tag deletes the members and the set itself.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> FolioResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool
                .get()
                .await
                .map_err(|e| FolioError::Cache(format!("Failed to get Redis connection: {}", e))),
            None => Err(FolioError::Cache("Cache is disabled".to_string())),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> FolioResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| FolioError::Cache(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
        tags: &[&str],
    ) -> FolioResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| FolioError::Cache(format!("Failed to set key '{}': {}", key, e)))?;

        for tag in tags {
            conn.sadd::<_, _, ()>(tag_set_key(tag), key)
                .await
                .map_err(|e| {
                    FolioError::Cache(format!("Failed to tag key '{}' with '{}': {}", key, tag, e))
                })?;
        }

        debug!("Cached key '{}' with TTL {}s, tags {:?}", key, ttl_secs, tags);
        Ok(())
    }

    async fn delete(&self, key: &str) -> FolioResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| FolioError::Cache(format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> FolioResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn().await?;
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| FolioError::Cache(format!("Failed to check key '{}': {}", key, e)))?;

        Ok(exists)
    }

    async fn invalidate_tags(&self, tags: &[&str]) -> FolioResult<u64> {
        if !self.is_enabled() {
            return Ok(0);
        }

        let mut conn = self.get_conn().await?;
        let mut evicted: u64 = 0;

        for tag in tags {
            let set_key = tag_set_key(tag);

            let keys: Vec<String> = conn
                .smembers(&set_key)
                .await
                .map_err(|e| FolioError::Cache(format!("Failed to read tag '{}': {}", tag, e)))?;

            if !keys.is_empty() {
                let deleted: i64 = conn
                    .del(&keys)
                    .await
                    .map_err(|e| FolioError::Cache(format!("Failed to delete keys: {}", e)))?;
                evicted += deleted as u64;
            }

            conn.del::<_, ()>(&set_key)
                .await
                .map_err(|e| FolioError::Cache(format!("Failed to drop tag '{}': {}", tag, e)))?;
        }

        debug!("Invalidated {} entries for tags {:?}", evicted, tags);
        Ok(evicted)
    }
}
