//! JSON-file backed key-value store.
//!
//! All keys live in one JSON object at `~/.monsterdex/storage.json` (or the
//! configured path). Every write rewrites the whole file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use super::KvStore;
use crate::error::{MonsterdexError, Result};

/// Persistent key-value store backed by a single JSON file.
pub struct FileKvStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileKvStore {
    /// Open a store at `path`. The file is created on first write.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_file(&self) -> Result<BTreeMap<String, String>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(MonsterdexError::Storage(format!(
                    "Failed to read store at {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&data) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Store file is corrupt, starting empty"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn save_file(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    MonsterdexError::Storage(format!(
                        "Failed to create store directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, json).map_err(|e| {
            MonsterdexError::Storage(format!(
                "Failed to write store at {}: {}",
                self.path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600));
        }

        Ok(())
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock().expect("file store lock poisoned");
        Ok(self.load_file()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.lock.lock().expect("file store lock poisoned");
        let mut entries = self.load_file()?;
        entries.insert(key.to_string(), value.to_string());
        self.save_file(&entries)
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let _guard = self.lock.lock().expect("file store lock poisoned");
        let mut entries = self.load_file()?;
        let removed = entries.remove(key).is_some();
        if removed {
            self.save_file(&entries)?;
        }
        Ok(removed)
    }
}
