//! Configuration validation
//!
//! Structural checks run once at startup. Soft problems (missing credential,
//! no service addresses) are reported by [`crate::config::Config::warn_incomplete`]
//! instead and never fail startup.

use super::models::*;
use tracing::debug;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating server configuration");

        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.timeout == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }
        if self.max_body_size == 0 {
            return Err("Max body size must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for EmailConfig {
    fn validate(&self) -> Result<(), String> {
        if self.from.trim().is_empty() {
            return Err("Sender address cannot be empty".to_string());
        }
        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err(format!(
                "Email API base must use http:// or https:// scheme, got: {}",
                self.api_base
            ));
        }
        if self.timeout_secs == 0 {
            return Err("Email timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for RoutingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.fallback.trim().is_empty() {
            return Err("Fallback recipient cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<(), String> {
        if self.requests_per_minute == 0 {
            return Err("Rate limit must allow at least one request per window".to_string());
        }
        if self.window_secs == 0 {
            return Err("Rate limit window must be greater than 0".to_string());
        }
        if self.sweep_interval_secs == 0 {
            return Err("Rate limit sweep interval must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for IntakeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.honeypot_field.is_empty() {
            return Err("Honeypot field name cannot be empty".to_string());
        }
        if self.draft_dir.as_os_str().is_empty() {
            return Err("Draft directory cannot be empty".to_string());
        }
        Ok(())
    }
}
