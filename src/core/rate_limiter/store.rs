//! Storage backends for rate limit windows

use super::types::WindowState;
use async_trait::async_trait;
use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Per-key timestamp storage.
///
/// Implementations must make `record` atomic per key: two concurrent calls
/// for the same key may not both observe the same pre-append state.
#[async_trait]
pub trait RateLimitStore: Send + Sync {
    /// Prune expired timestamps for `key`, then append `now` if fewer than `limit` remain
    async fn record(
        &self,
        key: &str,
        now: Instant,
        window: Duration,
        limit: u32,
    ) -> WindowState;

    /// Prune expired timestamps for `key` and return the survivors, oldest first.
    ///
    /// A key left with no timestamps is removed.
    async fn prune(&self, key: &str, now: Instant, window: Duration) -> Vec<Instant>;

    /// Drop every key whose window is empty; returns how many were removed
    async fn sweep(&self, now: Instant, window: Duration) -> usize;

    /// Forget a single key
    async fn remove(&self, key: &str) -> bool;

    /// Forget every key
    async fn clear(&self);

    /// Number of tracked keys
    async fn len(&self) -> usize;
}

/// Process-local store.
///
/// Each key lives in a sharded map; updates happen under the shard's write
/// lock, and sweeping uses `retain`, so an entry is never removed mid-update.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, Vec<Instant>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn prune_expired(timestamps: &mut Vec<Instant>, now: Instant, window: Duration) {
    timestamps.retain(|&t| now.duration_since(t) < window);
}

fn apply(
    timestamps: &mut Vec<Instant>,
    now: Instant,
    window: Duration,
    limit: u32,
) -> WindowState {
    prune_expired(timestamps, now, window);

    let recorded = (timestamps.len() as u64) < u64::from(limit);
    if recorded {
        timestamps.push(now);
    }

    WindowState {
        recorded,
        count: timestamps.len() as u32,
        oldest: timestamps.first().copied(),
    }
}

#[async_trait]
impl RateLimitStore for InMemoryStore {
    async fn record(
        &self,
        key: &str,
        now: Instant,
        window: Duration,
        limit: u32,
    ) -> WindowState {
        // Avoid String allocation if key already exists
        if let Some(mut timestamps) = self.entries.get_mut(key) {
            return apply(&mut timestamps, now, window, limit);
        }
        let mut timestamps = self.entries.entry(key.to_string()).or_default();
        apply(&mut timestamps, now, window, limit)
    }

    async fn prune(&self, key: &str, now: Instant, window: Duration) -> Vec<Instant> {
        let survivors = match self.entries.get_mut(key) {
            Some(mut timestamps) => {
                prune_expired(&mut timestamps, now, window);
                timestamps.to_vec()
            }
            None => return Vec::new(),
        };
        if survivors.is_empty() {
            self.entries.remove_if(key, |_, timestamps| timestamps.is_empty());
        }
        survivors
    }

    async fn sweep(&self, now: Instant, window: Duration) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, timestamps| {
            prune_expired(timestamps, now, window);
            !timestamps.is_empty()
        });
        before.saturating_sub(self.entries.len())
    }

    async fn remove(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    async fn clear(&self) {
        self.entries.clear();
    }

    async fn len(&self) -> usize {
        self.entries.len()
    }
}
