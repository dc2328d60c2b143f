//! Monster records as served by mhw-db.
//!
//! Only the fields monsterdex displays are modelled; serde ignores the rest.
//! Collections default to empty so partial records still decode, and a
//! `null` in a defaulted field reads as the default.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as `T::default()`; `#[serde(default)]` only covers absence.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Stable identifier of a monster record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonsterId(pub u64);

impl fmt::Display for MonsterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MonsterId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(MonsterId)
    }
}

/// Abbreviated record used for name search.
///
/// Also the decode target of `GET /monsters`: every other field of the list
/// response is skipped unparsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonsterSummary {
    pub id: MonsterId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Full monster record from `GET /monsters/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterRecord {
    pub id: MonsterId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Size class, `"large"` or `"small"`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub elements: Vec<String>,
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

impl MonsterRecord {
    /// Project down to `{id, name}`.
    pub fn summary(&self) -> MonsterSummary {
        MonsterSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ailment {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub zone_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resistance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub element: String,
    #[serde(default)]
    pub condition: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    #[serde(default, deserialize_with = "null_as_default")]
    pub element: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stars: u8,
    #[serde(default)]
    pub condition: Option<String>,
}

impl Weakness {
    /// Effectiveness rendered as `★` repeated `stars` times.
    pub fn star_string(&self) -> String {
        "★".repeat(usize::from(self.stars))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub item: RewardItem,
    #[serde(default, deserialize_with = "null_as_default")]
    pub conditions: Vec<RewardCondition>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardItem {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rarity: u8,
}

/// How and how often a reward drops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardCondition {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub subtype: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chance: u32,
}

/// All conditions under which one item drops.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardGroup {
    pub item: RewardItem,
    pub conditions: Vec<RewardCondition>,
}

/// Group rewards by item name.
///
/// Items keep the order in which they first appear; conditions are
/// concatenated in encounter order. The first entry's item data wins.
pub fn group_rewards(rewards: &[Reward]) -> Vec<RewardGroup> {
    let mut groups: Vec<RewardGroup> = Vec::new();
    for reward in rewards {
        match groups.iter_mut().find(|g| g.item.name == reward.item.name) {
            Some(group) => group.conditions.extend(reward.conditions.iter().cloned()),
            None => groups.push(RewardGroup {
                item: reward.item.clone(),
                conditions: reward.conditions.clone(),
            }),
        }
    }
    groups
}
