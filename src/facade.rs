//! High-level library facade.
//!
//! `Monsterdex` wires the name cache, the favorites store, and a
//! [`MonsterApi`] together behind the handful of operations a front-end
//! needs: search, show a monster, toggle a favorite, page through favorites.
//!
//! # Example
//!
//! ```rust,ignore
//! use monsterdex::{Config, Monsterdex};
//!
//! let dex = Monsterdex::from_config(&Config::load()?)?;
//! let result = dex.search("rath").await?;
//! for m in &result.matches {
//!     println!("{} {}", m.id, m.name);
//! }
//! ```

use std::sync::Arc;
use std::time::Duration;

use crate::api::{HttpMonsterApi, MonsterApi, MonsterId, MonsterRecord, MonsterSummary};
use crate::cache::NameCache;
use crate::config::Config;
use crate::error::{MonsterdexError, Result};
use crate::favorites::{FavoriteMonster, FavoritesStore, ToggleOutcome};
use crate::pagination::{paginate, total_pages};
use crate::search::search_names;
use crate::storage::{FileKvStore, KvStore};

/// Search matches plus where the name list came from.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub from_cache: bool,
    pub matches: Vec<MonsterSummary>,
}

/// A full record and whether it is favorited.
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterDetail {
    pub record: MonsterRecord,
    pub favorite: bool,
}

/// One page of the favorites list.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoritesPage {
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub items: Vec<FavoriteMonster>,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Library entry point.
pub struct Monsterdex {
    api: Arc<dyn MonsterApi>,
    names: NameCache,
    favorites: FavoritesStore,
    page_size: usize,
    max_suggestions: usize,
}

impl Monsterdex {
    /// Create a new builder.
    pub fn builder() -> MonsterdexBuilder {
        MonsterdexBuilder::new()
    }

    /// HTTP API and file-backed store as described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api = HttpMonsterApi::new(&config.api)?;
        let store = FileKvStore::new(config.storage_path());
        Self::builder()
            .config(config.clone())
            .api(Arc::new(api))
            .store(Arc::new(store))
            .build()
    }

    /// Up to `max_suggestions` monsters whose name contains `query`.
    pub async fn search(&self, query: &str) -> Result<SearchResult> {
        let lookup = self.names.get_all_monster_names().await?;
        let matches = search_names(&lookup.data, query, self.max_suggestions)
            .into_iter()
            .cloned()
            .collect();
        Ok(SearchResult {
            from_cache: lookup.from_cache,
            matches,
        })
    }

    /// Fetch the full record for `id`.
    pub async fn monster(&self, id: MonsterId) -> Result<MonsterDetail> {
        let record = self.api.get_monster(id).await?;
        let favorite = self.favorites.is_favorite(record.id);
        Ok(MonsterDetail { record, favorite })
    }

    /// Toggle `id` in the favorites list.
    ///
    /// Removing an existing favorite uses the stored snapshot and needs no
    /// network; adding fetches the current record first.
    pub async fn toggle_favorite(&self, id: MonsterId) -> Result<ToggleOutcome> {
        let stored = self.favorites.get_favorites().into_iter().find(|f| f.id == id);
        let record = match stored {
            Some(fav) => record_from_favorite(fav),
            None => self.api.get_monster(id).await?,
        };
        self.favorites.toggle_favorite(&record)
    }

    /// Page `page` (1-indexed) of the favorites list, not clamped.
    pub fn favorites_page(&self, page: usize) -> FavoritesPage {
        let favorites = self.favorites.get_favorites();
        let slice = paginate(&favorites, page, self.page_size);
        FavoritesPage {
            total: favorites.len(),
            page,
            total_pages: total_pages(favorites.len(), self.page_size),
            items: slice.visible.to_vec(),
            has_prev: slice.has_prev,
            has_next: slice.has_next,
        }
    }

    pub fn names(&self) -> &NameCache {
        &self.names
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

fn record_from_favorite(fav: FavoriteMonster) -> MonsterRecord {
    MonsterRecord {
        id: fav.id,
        name: fav.name,
        kind: fav.kind,
        species: fav.species,
        description: fav.description,
        elements: fav.elements,
        ailments: fav.ailments,
        locations: fav.locations,
        resistances: fav.resistances,
        weaknesses: fav.weaknesses,
        rewards: fav.rewards,
    }
}

/// Builder for `Monsterdex`.
pub struct MonsterdexBuilder {
    api: Option<Arc<dyn MonsterApi>>,
    store: Option<Arc<dyn KvStore>>,
    config: Config,
}

impl MonsterdexBuilder {
    /// Create a new builder with default config.
    pub fn new() -> Self {
        Self {
            api: None,
            store: None,
            config: Config::default(),
        }
    }

    /// Set the monster API (required).
    pub fn api(mut self, api: Arc<dyn MonsterApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Set the key-value store (required).
    pub fn store(mut self, store: Arc<dyn KvStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Keys, TTL, and page sizes come from here.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Build the `Monsterdex`.
    ///
    /// Returns `Err` if the API or the store was not set.
    pub fn build(self) -> Result<Monsterdex> {
        let api = self.api.ok_or_else(|| {
            MonsterdexError::Config("Monsterdex requires an API. Call .api() on the builder.".into())
        })?;
        let store = self.store.ok_or_else(|| {
            MonsterdexError::Config(
                "Monsterdex requires a store. Call .store() on the builder.".into(),
            )
        })?;

        let cfg = self.config;
        let names = NameCache::new(
            store.clone(),
            api.clone(),
            cfg.cache.key,
            Duration::from_secs(cfg.cache.ttl_secs),
        );
        let favorites = FavoritesStore::new(store, cfg.favorites.key);

        Ok(Monsterdex {
            api,
            names,
            favorites,
            page_size: cfg.favorites.page_size.max(1),
            max_suggestions: cfg.search.max_suggestions,
        })
    }
}

impl Default for MonsterdexBuilder {
    fn default() -> Self {
        Self::new()
    }
}
