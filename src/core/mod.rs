//! Core functionality for the quote service
//!
//! This module contains the business logic: payload validation, bot
//! filtering, rate limiting, recipient routing and email dispatch.

pub mod notify; // Outbound email (internal notification + confirmation)
pub mod pipeline;
pub mod quote;
pub mod rate_limiter; // Rate limiting system
pub mod routing;

// Re-export commonly used types
pub use pipeline::{QuoteOutcome, QuotePipeline};
