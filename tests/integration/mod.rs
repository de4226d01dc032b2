//! Integration tests for quote-intake
//!
//! These tests drive the assembled components through their public API.

pub mod config_tests;
pub mod error_handling_tests;
pub mod quote_endpoint_tests;
