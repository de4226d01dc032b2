//! Core rate limiter implementation

use super::clock::{Clock, SystemClock};
use super::store::{InMemoryStore, RateLimitStore};
use super::types::RateLimitResult;
use crate::config::models::rate_limit::RateLimitConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Sliding window rate limiter
pub struct RateLimiter {
    /// Window storage
    pub(super) store: Arc<dyn RateLimitStore>,
    /// Time source
    pub(super) clock: Arc<dyn Clock>,
    /// Window duration
    pub(super) window: Duration,
    /// Minimum time between full sweeps
    pub(super) sweep_interval: Duration,
    /// When the last sweep ran
    pub(super) last_sweep: Mutex<Instant>,
}

impl RateLimiter {
    /// Create an in-memory rate limiter on the system clock
    pub fn new(config: &RateLimitConfig) -> Self {
        Self::with_parts(
            Arc::new(InMemoryStore::new()),
            Arc::new(SystemClock),
            config.window(),
            config.sweep_interval(),
        )
    }

    /// Create a rate limiter from explicit parts
    pub fn with_parts(
        store: Arc<dyn RateLimitStore>,
        clock: Arc<dyn Clock>,
        window: Duration,
        sweep_interval: Duration,
    ) -> Self {
        let last_sweep = Mutex::new(clock.now());
        Self {
            store,
            clock,
            window,
            sweep_interval,
            last_sweep,
        }
    }

    /// Atomically check and record a request for `key`.
    ///
    /// Denied requests do not consume quota. `retry_after_secs` is the time
    /// until the oldest request in the window expires, rounded up, at least 1.
    pub async fn check_and_record(&self, key: &str, limit: u32) -> RateLimitResult {
        let now = self.clock.now();
        self.maybe_sweep(now).await;

        let state = self.store.record(key, now, self.window, limit).await;

        let retry_after_secs = if state.recorded {
            None
        } else {
            let wait = state
                .oldest
                .map(|oldest| self.until_expiry(oldest, now))
                .unwrap_or(self.window);
            Some(ceil_secs(wait).max(1))
        };

        if !state.recorded {
            debug!(
                "Rate limit exceeded for {}: {}/{} requests",
                key, state.count, limit
            );
        }

        RateLimitResult {
            allowed: state.recorded,
            current_count: state.count,
            limit,
            retry_after_secs,
        }
    }

    /// Window duration
    pub fn window(&self) -> Duration {
        self.window
    }

    pub(super) fn until_expiry(&self, oldest: Instant, now: Instant) -> Duration {
        self.window.saturating_sub(now.duration_since(oldest))
    }

    /// Run a full sweep when the interval has elapsed; at most one caller wins.
    async fn maybe_sweep(&self, now: Instant) {
        let due = {
            let mut last = self.last_sweep.lock();
            if now.duration_since(*last) > self.sweep_interval {
                *last = now;
                true
            } else {
                false
            }
        };

        if due {
            let removed = self.store.sweep(now, self.window).await;
            debug!(removed, "Rate limiter sweep completed");
        }
    }
}

/// Whole seconds, rounded up
pub(super) fn ceil_secs(duration: Duration) -> u64 {
    duration.as_nanos().div_ceil(1_000_000_000) as u64
}
