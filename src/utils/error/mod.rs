//! Error handling utilities
//!
//! This module provides the crate-wide error type and its HTTP response mapping.

pub mod error;

// Re-export commonly used types
pub use error::*;
