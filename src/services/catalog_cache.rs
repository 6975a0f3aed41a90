use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::errors::StoreError;

struct CacheEntry {
    value: Arc<Vec<String>>,
    expires_at: Instant,
}

/// Process-wide memo of the item catalog.
///
/// A successful load is served unchanged until `ttl` elapses. Failed loads are
/// never stored, so the next caller tries the store again. Refreshes are
/// serialized behind the lock: callers arriving during a refresh wait for it
/// and then read the fresh entry.
pub struct CatalogCache {
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl CatalogCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Mutex::new(None),
        }
    }

    pub async fn get_or_refresh<F, Fut>(&self, load: F) -> Result<Arc<Vec<String>>, StoreError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<String>, StoreError>>,
    {
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            if Instant::now() < cached.expires_at {
                return Ok(Arc::clone(&cached.value));
            }
        }

        let value = Arc::new(load().await?);
        *entry = Some(CacheEntry {
            value: Arc::clone(&value),
            expires_at: Instant::now() + self.ttl,
        });
        Ok(value)
    }
}
