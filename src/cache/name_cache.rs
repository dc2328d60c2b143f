//! Cached list of every monster's `{id, name}`.
//!
//! Persists under the `mhw-monsters-names` key. The list is refetched from
//! the API only when the stored envelope is missing or older than the TTL.
//! Concurrent refreshes are collapsed: callers queue on an async mutex and
//! the later ones reuse what the first one stored.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::envelope::{now_millis, EnvelopeCache};
use crate::api::{MonsterApi, MonsterSummary};
use crate::error::Result;
use crate::storage::KvStore;

/// Result of a name lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct NameLookup {
    /// `true` when served from the stored envelope without a network call.
    pub from_cache: bool,
    pub data: Vec<MonsterSummary>,
}

/// Snapshot of the stored envelope for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStatus {
    /// Age of the stored envelope, `None` when nothing usable is stored.
    pub age: Option<Duration>,
    pub fresh: bool,
    pub entries: usize,
    pub ttl: Duration,
}

/// TTL cache in front of `GET /monsters`.
pub struct NameCache {
    cache: EnvelopeCache<Vec<MonsterSummary>>,
    api: Arc<dyn MonsterApi>,
    refresh_lock: Mutex<()>,
}

impl NameCache {
    pub fn new(
        store: Arc<dyn KvStore>,
        api: Arc<dyn MonsterApi>,
        key: impl Into<String>,
        ttl: Duration,
    ) -> Self {
        Self {
            cache: EnvelopeCache::new(store, key, ttl),
            api,
            refresh_lock: Mutex::new(()),
        }
    }

    /// Every monster's `{id, name}`, from cache when fresh.
    ///
    /// A fresh envelope is returned without touching the network. Otherwise
    /// exactly one `list_monsters()` call is made, its result is stored,
    /// and `from_cache` is `false`. API failures are returned unchanged and
    /// leave the stored envelope as it was.
    pub async fn get_all_monster_names(&self) -> Result<NameLookup> {
        if let Some(data) = self.cache.get() {
            debug!(key = %self.cache.key(), entries = data.len(), "Name cache hit");
            return Ok(NameLookup {
                from_cache: true,
                data,
            });
        }

        let _guard = self.refresh_lock.lock().await;

        // Another caller may have refreshed while we waited.
        if let Some(data) = self.cache.get() {
            debug!(key = %self.cache.key(), "Name cache filled by concurrent refresh");
            return Ok(NameLookup {
                from_cache: true,
                data,
            });
        }

        self.fetch_and_store().await
    }

    /// Fetch and store the list regardless of the stored envelope's age.
    pub async fn refresh(&self) -> Result<NameLookup> {
        let _guard = self.refresh_lock.lock().await;
        self.fetch_and_store().await
    }

    /// Drop the stored envelope. Returns `true` if one was present.
    pub fn clear(&self) -> Result<bool> {
        self.cache.clear()
    }

    /// Describe what is currently stored.
    pub fn status(&self) -> CacheStatus {
        let ttl = self.cache.ttl();
        match self.cache.get_envelope() {
            Some(envelope) => {
                let now = now_millis();
                CacheStatus {
                    age: Some(Duration::from_millis(envelope.age_millis(now))),
                    fresh: envelope.is_fresh(now, ttl),
                    entries: envelope.data.len(),
                    ttl,
                }
            }
            None => CacheStatus {
                age: None,
                fresh: false,
                entries: 0,
                ttl,
            },
        }
    }

    async fn fetch_and_store(&self) -> Result<NameLookup> {
        info!("Fetching monster list from API");
        let data = self.api.list_monsters().await?;

        // The data is valid even if it cannot be cached.
        if let Err(e) = self.cache.set(data.clone()) {
            warn!(key = %self.cache.key(), error = %e, "Failed to store name cache");
        }

        info!(entries = data.len(), "Monster list cached");
        Ok(NameLookup {
            from_cache: false,
            data,
        })
    }
}
