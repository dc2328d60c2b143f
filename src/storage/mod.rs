//! String-keyed key-value persistence.
//!
//! Values are JSON strings. The name cache and the favorites store each own
//! one key; neither reads the other's.

pub mod file;
pub mod memory;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::error::Result;

/// A string key to string value store.
///
/// Implementations must be safe to share between tasks; every call is a
/// complete read or write of one key.
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Returns `true` if a value was present.
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Read and decode the JSON value under `key`.
///
/// Fails soft: an absent key, an unreadable store, or a value that does not
/// decode as `T` all yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &dyn KvStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored value, treating as absent");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored value is corrupt, treating as absent");
            None
        }
    }
}

/// Encode `value` as JSON and store it under `key`, replacing any old value.
pub fn save_json<T: Serialize + ?Sized>(store: &dyn KvStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    store.set(key, &json)
}
