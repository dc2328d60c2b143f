//! monsterdex: search the Monster Hunter World database and keep a local
//! favorites list.
//!
//! The monster name list is cached for five minutes in a local key-value
//! store; favorites are snapshots stored under their own key in the same
//! store.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod facade;
pub mod favorites;
pub mod pagination;
pub mod search;
pub mod storage;

pub use api::{HttpMonsterApi, MonsterApi, MonsterId, MonsterRecord, MonsterSummary};
pub use cache::{CacheEnvelope, EnvelopeCache, NameCache, NameLookup};
pub use config::Config;
pub use error::{MonsterdexError, Result};
pub use facade::{FavoritesPage, MonsterDetail, Monsterdex, MonsterdexBuilder, SearchResult};
pub use favorites::{FavoriteMonster, FavoritesStore, ToggleOutcome};
pub use pagination::{paginate, total_pages, Page, Pager};
pub use search::search_names;
pub use storage::{FileKvStore, KvStore, MemoryKvStore};
