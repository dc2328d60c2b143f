//! Locally persisted list of favorite monsters.

pub mod store;

pub use store::{FavoriteMonster, FavoritesStore, ToggleOutcome};
