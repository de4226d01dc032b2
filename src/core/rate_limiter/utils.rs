//! Utility functions for rate limiter

use super::limiter::{RateLimiter, ceil_secs};
use super::types::RateLimitStats;

impl RateLimiter {
    /// Get current window usage for a key without recording a request
    pub async fn stats(&self, key: &str) -> RateLimitStats {
        let now = self.clock.now();
        let timestamps = self.store.prune(key, now, self.window).await;

        let window_resets_in_secs = timestamps
            .first()
            .map(|&oldest| ceil_secs(self.until_expiry(oldest, now)))
            .unwrap_or(0);

        RateLimitStats {
            request_count: timestamps.len() as u32,
            window_resets_in_secs,
        }
    }

    /// Forget a single client
    pub async fn reset(&self, key: &str) {
        self.store.remove(key).await;
    }

    /// Forget every client and restart the sweep timer
    pub async fn clear(&self) {
        self.store.clear().await;
        *self.last_sweep.lock() = self.clock.now();
    }

    /// Number of clients currently tracked
    pub async fn tracked_clients(&self) -> usize {
        self.store.len().await
    }
}
