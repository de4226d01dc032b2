//! Utility modules for the quote service
//!
//! - **error**: Error types and their HTTP mapping

pub mod error; // Error handling
