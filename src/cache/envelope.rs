//! Timestamped cache envelopes over a [`KvStore`] key.
//!
//! Staleness is evaluated on every read; nothing is evicted in the
//! background. A stale envelope stays in the store until overwritten.

use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::storage::{load_json, save_json, KvStore};

/// Cached payload paired with its creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEnvelope<T> {
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub data: T,
}

impl<T> CacheEnvelope<T> {
    /// Wrap `data` stamped with the current time.
    pub fn new(data: T) -> Self {
        Self::at(now_millis(), data)
    }

    pub fn at(timestamp: i64, data: T) -> Self {
        Self { timestamp, data }
    }

    /// Milliseconds elapsed since creation; a future timestamp counts as 0.
    pub fn age_millis(&self, now_ms: i64) -> u64 {
        u64::try_from(now_ms.saturating_sub(self.timestamp)).unwrap_or(0)
    }

    /// `true` while `now - timestamp < ttl`.
    pub fn is_fresh(&self, now_ms: i64, ttl: Duration) -> bool {
        u128::from(self.age_millis(now_ms)) < ttl.as_millis()
    }
}

/// Current wall-clock time in epoch milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// A single cached value under one store key, trusted only within `ttl`.
pub struct EnvelopeCache<T> {
    store: Arc<dyn KvStore>,
    key: String,
    ttl: Duration,
    _marker: PhantomData<fn() -> T>,
}

impl<T> EnvelopeCache<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>, ttl: Duration) -> Self {
        Self {
            store,
            key: key.into(),
            ttl,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The stored envelope regardless of age. Corrupt values read as `None`.
    pub fn get_envelope(&self) -> Option<CacheEnvelope<T>> {
        load_json(self.store.as_ref(), &self.key)
    }

    /// The cached data if present and fresh.
    pub fn get(&self) -> Option<T> {
        let envelope = self.get_envelope()?;
        let now = now_millis();
        if envelope.is_fresh(now, self.ttl) {
            Some(envelope.data)
        } else {
            debug!(
                key = %self.key,
                age_ms = envelope.age_millis(now),
                "Cache envelope expired"
            );
            None
        }
    }

    /// Store `data` in a fresh envelope, replacing any previous one.
    pub fn set(&self, data: T) -> Result<()> {
        save_json(self.store.as_ref(), &self.key, &CacheEnvelope::new(data))
    }

    /// Drop the stored envelope. Returns `true` if one was present.
    pub fn clear(&self) -> Result<bool> {
        self.store.remove(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;

    const TTL: Duration = Duration::from_secs(300);

    fn cache(store: &Arc<MemoryKvStore>) -> EnvelopeCache<Vec<String>> {
        EnvelopeCache::new(store.clone() as Arc<dyn KvStore>, "names", TTL)
    }

    #[test]
    fn test_freshness_boundary() {
        let env = CacheEnvelope::at(1_000, ());
        assert!(env.is_fresh(1_000, TTL));
        assert!(env.is_fresh(1_000 + 299_999, TTL));
        assert!(!env.is_fresh(1_000 + 300_000, TTL), "age == ttl is stale");
        assert!(!env.is_fresh(1_000 + 400_000, TTL));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let env = CacheEnvelope::at(10_000, ());
        assert_eq!(env.age_millis(5_000), 0);
        assert!(env.is_fresh(5_000, TTL));
    }

    #[test]
    fn test_zero_ttl_never_fresh() {
        let env = CacheEnvelope::at(1_000, ());
        assert!(!env.is_fresh(1_000, Duration::ZERO));
    }

    #[test]
    fn test_set_then_get() {
        let store = Arc::new(MemoryKvStore::new());
        let cache = cache(&store);
        assert_eq!(cache.get(), None);
        cache.set(vec!["Rathalos".into()]).unwrap();
        assert_eq!(cache.get(), Some(vec!["Rathalos".to_string()]));
    }

    #[test]
    fn test_stale_envelope_is_ignored_but_kept() {
        let store = Arc::new(MemoryKvStore::new());
        let stale = CacheEnvelope::at(now_millis() - 400_000, vec!["Old".to_string()]);
        save_json(store.as_ref(), "names", &stale).unwrap();

        let cache = cache(&store);
        assert_eq!(cache.get(), None);
        assert_eq!(cache.get_envelope(), Some(stale));
    }

    #[test]
    fn test_wire_format() {
        let store = Arc::new(MemoryKvStore::new());
        save_json(store.as_ref(), "names", &CacheEnvelope::at(42, vec!["A".to_string()]))
            .unwrap();
        assert_eq!(
            store.get("names").unwrap().as_deref(),
            Some(r#"{"timestamp":42,"data":["A"]}"#)
        );
    }

    #[test]
    fn test_corrupt_envelope_reads_as_absent() {
        let store = Arc::new(MemoryKvStore::new());
        store.set("names", "{not json").unwrap();
        let cache = cache(&store);
        assert_eq!(cache.get_envelope(), None);
        assert_eq!(cache.get(), None);
    }

    #[test]
    fn test_clear() {
        let store = Arc::new(MemoryKvStore::new());
        let cache = cache(&store);
        cache.set(vec![]).unwrap();
        assert!(cache.clear().unwrap());
        assert!(!cache.clear().unwrap());
        assert!(store.is_empty());
    }
}
