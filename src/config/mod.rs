//! Configuration for monsterdex.
//!
//! Loaded from `~/.monsterdex/config.json` with every field defaulted, then
//! overridden from `MONSTERDEX_*` environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MonsterdexError, Result};

/// Default mhw-db endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://mhw-db.com";
/// Key holding the name cache envelope.
pub const DEFAULT_NAME_CACHE_KEY: &str = "mhw-monsters-names";
/// Key holding the favorites list.
pub const DEFAULT_FAVORITES_KEY: &str = "favoritos";
/// Name cache lifetime: 5 minutes.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
/// Favorites shown per page.
pub const DEFAULT_PAGE_SIZE: usize = 5;
/// Search suggestions shown per query.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 8;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub cache: CacheConfig,
    pub favorites: FavoritesConfig,
    pub search: SearchConfig,
    pub storage: StorageConfig,
}

/// Remote monster API settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL, without trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Name cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub key: String,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_NAME_CACHE_KEY.to_string(),
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

/// Favorites list settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    pub key: String,
    pub page_size: usize,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_FAVORITES_KEY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Name search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

/// Key-value store location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path of the JSON store file. `None` means `~/.monsterdex/storage.json`.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Base directory: `~/.monsterdex`.
    pub fn dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".monsterdex")
    }

    /// Default config file path: `~/.monsterdex/config.json`.
    pub fn path() -> PathBuf {
        Self::dir().join("config.json")
    }

    /// Load from the default path and apply environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::path())
    }

    /// Load from `path` and apply environment overrides.
    ///
    /// A missing file yields the defaults; a file that does not parse is an
    /// error so a typo never silently resets the user's settings.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = match std::fs::read_to_string(path) {
            Ok(data) => serde_json::from_str::<Config>(&data).map_err(|e| {
                MonsterdexError::Config(format!(
                    "Failed to parse config at {}: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Config::default()
            }
            Err(e) => {
                return Err(MonsterdexError::Config(format!(
                    "Failed to read config at {}: {}",
                    path.display(),
                    e
                )))
            }
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply `MONSTERDEX_*` environment variables on top of the loaded values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("MONSTERDEX_API_BASE_URL") {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                self.api.base_url = url.to_string();
            }
        }
        if let Some(raw) = lookup("MONSTERDEX_API_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => self.api.timeout_secs = secs,
                _ => warn!(value = %raw, "Ignoring invalid MONSTERDEX_API_TIMEOUT_SECS"),
            }
        }
        if let Some(raw) = lookup("MONSTERDEX_CACHE_TTL_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) => self.cache.ttl_secs = secs,
                Err(_) => warn!(value = %raw, "Ignoring invalid MONSTERDEX_CACHE_TTL_SECS"),
            }
        }
        if let Some(path) = lookup("MONSTERDEX_STORAGE_PATH") {
            if !path.trim().is_empty() {
                self.storage.path = Some(PathBuf::from(path.trim()));
            }
        }
    }

    /// Resolved key-value store path.
    pub fn storage_path(&self) -> PathBuf {
        self.storage
            .path
            .clone()
            .unwrap_or_else(|| Self::dir().join("storage.json"))
    }
}
