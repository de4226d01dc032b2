//! Rate Limiting Implementation
//!
//! Per-client sliding window limiter. Storage and time are injected so the
//! in-memory store can be swapped for a shared counter and tests can drive
//! the clock by hand.

mod clock;
mod limiter;
mod store;
mod types;
mod utils;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use limiter::RateLimiter;
pub use store::{InMemoryStore, RateLimitStore};
pub use types::{RateLimitResult, RateLimitStats, WindowState};
