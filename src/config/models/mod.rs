//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod email;
pub mod intake;
pub mod rate_limit;
pub mod routing;
pub mod server;

// Re-export all configuration types
pub use email::*;
pub use intake::*;
pub use rate_limit::*;
pub use routing::*;
pub use server::*;

use std::path::PathBuf;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    64 * 1024 // 64KB
}

pub fn default_rpm() -> u32 {
    3
}

pub fn default_window_secs() -> u64 {
    60
}

pub fn default_sweep_interval_secs() -> u64 {
    120
}

pub fn default_email_api_base() -> String {
    "https://api.resend.com".to_string()
}

pub fn default_email_timeout() -> u64 {
    10
}

pub fn default_from_email() -> String {
    "onboarding@resend.dev".to_string()
}

pub fn default_fallback_email() -> String {
    "quotes@splitrocknewyork.com".to_string()
}

pub fn default_honeypot_field() -> String {
    "_gotcha".to_string()
}

pub fn default_business_name() -> String {
    "SplitRock New York".to_string()
}

pub fn default_draft_dir() -> PathBuf {
    PathBuf::from("draft-emails")
}
