//! Favorites persistence.
//!
//! The whole list is stored as one JSON array under the `favoritos` key and
//! rewritten after every change. Entries are snapshots taken when the
//! monster was favorited; later API changes do not reach them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::models::null_as_default;
use crate::api::{Ailment, Location, MonsterId, MonsterRecord, Resistance, Reward, Weakness};
use crate::error::{MonsterdexError, Result};
use crate::storage::{load_json, save_json, KvStore};

/// Snapshot of a monster at the moment it was favorited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteMonster {
    pub id: MonsterId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ailments: Vec<Ailment>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<Location>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub resistances: Vec<Resistance>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weaknesses: Vec<Weakness>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rewards: Vec<Reward>,
}

impl FavoriteMonster {
    /// Copy the favorited fields out of a full record.
    pub fn snapshot(record: &MonsterRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            kind: record.kind.clone(),
            species: record.species.clone(),
            elements: record.elements.clone(),
            description: record.description.clone(),
            ailments: record.ailments.clone(),
            locations: record.locations.clone(),
            resistances: record.resistances.clone(),
            weaknesses: record.weaknesses.clone(),
            rewards: record.rewards.clone(),
        }
    }
}

/// What [`FavoritesStore::toggle_favorite`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Favorites list over a [`KvStore`] key.
pub struct FavoritesStore {
    store: Arc<dyn KvStore>,
    key: String,
}

impl FavoritesStore {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// The stored list, or an empty one when absent or unreadable.
    pub fn get_favorites(&self) -> Vec<FavoriteMonster> {
        load_json(self.store.as_ref(), &self.key).unwrap_or_default()
    }

    /// Add `monster` if not yet favorited, remove it otherwise.
    ///
    /// Removal keeps the order of the remaining entries; additions go to the
    /// end. The full list is written back in one store call.
    ///
    /// # Errors
    ///
    /// `InvalidInput` when adding a record that has no name; nothing is
    /// written. Removal only needs the id.
    pub fn toggle_favorite(&self, monster: &MonsterRecord) -> Result<ToggleOutcome> {
        let mut favorites = self.get_favorites();
        let outcome = match favorites.iter().position(|f| f.id == monster.id) {
            Some(index) => {
                favorites.remove(index);
                ToggleOutcome::Removed
            }
            None => {
                validate(monster)?;
                favorites.push(FavoriteMonster::snapshot(monster));
                ToggleOutcome::Added
            }
        };

        save_json(self.store.as_ref(), &self.key, &favorites)?;
        info!(
            id = %monster.id,
            name = %monster.name,
            outcome = ?outcome,
            total = favorites.len(),
            "Favorites updated"
        );
        Ok(outcome)
    }

    /// Whether `id` is in the list.
    pub fn is_favorite(&self, id: MonsterId) -> bool {
        self.get_favorites().iter().any(|f| f.id == id)
    }

    pub fn len(&self) -> usize {
        self.get_favorites().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every favorite.
    pub fn clear(&self) -> Result<()> {
        debug!(key = %self.key, "Clearing favorites");
        save_json(self.store.as_ref(), &self.key, &Vec::<FavoriteMonster>::new())
    }
}

fn validate(monster: &MonsterRecord) -> Result<()> {
    if monster.name.trim().is_empty() {
        return Err(MonsterdexError::InvalidInput(format!(
            "monster {} has no name",
            monster.id
        )));
    }
    Ok(())
}
