//! Counting in-memory [`MonsterApi`] for tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{MonsterApi, MonsterId, MonsterRecord, MonsterSummary};
use crate::error::{MonsterdexError, Result};

pub(crate) struct MockMonsterApi {
    records: Vec<MonsterRecord>,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    failing: AtomicBool,
    delay: Duration,
}

impl MockMonsterApi {
    pub(crate) fn new(records: Vec<MonsterRecord>) -> Self {
        Self {
            records,
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
            delay: Duration::ZERO,
        }
    }

    /// Stall every call so overlapping callers really overlap.
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    async fn stall(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    fn unavailable(url: &str) -> MonsterdexError {
        MonsterdexError::Api {
            status: 503,
            url: url.to_string(),
        }
    }
}

#[async_trait]
impl MonsterApi for MockMonsterApi {
    async fn list_monsters(&self) -> Result<Vec<MonsterSummary>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.stall().await;
        if self.failing.load(Ordering::SeqCst) {
            return Err(Self::unavailable("mock://monsters"));
        }
        Ok(self.records.iter().map(MonsterRecord::summary).collect())
    }

    async fn get_monster(&self, id: MonsterId) -> Result<MonsterRecord> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.stall().await;
        if self.failing.load(Ordering::SeqCst) {
            return Err(Self::unavailable(&format!("mock://monsters/{id}")));
        }
        self.records
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(MonsterdexError::Api {
                status: 404,
                url: format!("mock://monsters/{id}"),
            })
    }
}

/// Minimal record with the given id and name.
pub(crate) fn record(id: u64, name: &str) -> MonsterRecord {
    MonsterRecord {
        id: MonsterId(id),
        name: name.to_string(),
        kind: Some("large".into()),
        species: Some("flying wyvern".into()),
        description: Some(format!("{name} description")),
        elements: vec!["fire".into()],
        ailments: vec![],
        locations: vec![],
        resistances: vec![],
        weaknesses: vec![],
        rewards: vec![],
    }
}
