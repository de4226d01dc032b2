//! Rate limiter types and data structures

use std::time::Instant;

/// Rate limit result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimitResult {
    /// Whether the request is allowed
    pub allowed: bool,
    /// Requests counted in the window, including this one when allowed
    pub current_count: u32,
    /// Maximum requests allowed
    pub limit: u32,
    /// Retry after (in seconds, only set when not allowed)
    pub retry_after_secs: Option<u64>,
}

impl RateLimitResult {
    /// Remaining requests in the window
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.current_count)
    }
}

/// Window usage for one client, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStats {
    /// Requests in the current window
    pub request_count: u32,
    /// Seconds until the oldest request leaves the window (0 when idle)
    pub window_resets_in_secs: u64,
}

/// Result of a single store update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    /// Whether `now` was appended
    pub recorded: bool,
    /// Timestamps in the window after the update
    pub count: u32,
    /// Oldest surviving timestamp
    pub oldest: Option<Instant>,
}
