//! Remote monster-data API.
//!
//! [`MonsterApi`] is the seam between the caches and the network. The real
//! implementation is [`HttpMonsterApi`]; tests substitute counting mocks.

pub mod client;
pub mod models;

pub use client::HttpMonsterApi;
pub use models::{
    group_rewards, Ailment, Location, MonsterId, MonsterRecord, MonsterSummary, Resistance,
    Reward, RewardCondition, RewardGroup, RewardItem, Weakness,
};

use async_trait::async_trait;

use crate::error::Result;

/// Source of monster records.
#[async_trait]
pub trait MonsterApi: Send + Sync {
    /// Fetch every monster's `{id, name}` (`GET /monsters`).
    ///
    /// Only the summary fields are decoded, so a malformed detail field in
    /// one record cannot fail the whole list.
    async fn list_monsters(&self) -> Result<Vec<MonsterSummary>>;

    /// Fetch one monster record (`GET /monsters/{id}`).
    async fn get_monster(&self, id: MonsterId) -> Result<MonsterRecord>;
}

#[cfg(test)]
pub(crate) mod mock;
