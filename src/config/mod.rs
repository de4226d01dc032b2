//! Configuration management for the quote service
//!
//! This module handles loading, validation, and startup diagnostics for the
//! service configuration. Everything is built once at startup and injected
//! into the components that need it.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{QuoteError, Result};
use tracing::{debug, error, info, warn};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// HTTP server configuration
    pub server: ServerConfig,
    /// Email provider configuration
    pub email: EmailConfig,
    /// Recipient routing configuration
    pub routing: RoutingConfig,
    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,
    /// Form intake configuration
    pub intake: IntakeConfig,
}

impl Config {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.server
            .validate()
            .map_err(|e| QuoteError::Config(format!("Server config error: {}", e)))?;
        self.email
            .validate()
            .map_err(|e| QuoteError::Config(format!("Email config error: {}", e)))?;
        self.routing
            .validate()
            .map_err(|e| QuoteError::Config(format!("Routing config error: {}", e)))?;
        self.rate_limit
            .validate()
            .map_err(|e| QuoteError::Config(format!("Rate limit config error: {}", e)))?;
        self.intake
            .validate()
            .map_err(|e| QuoteError::Config(format!("Intake config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Log problems that degrade the service without preventing startup.
    ///
    /// Returns the number of warnings emitted.
    pub fn warn_incomplete(&self) -> usize {
        let mut warnings = 0;

        if !self.email.has_api_key() {
            error!("RESEND_API_KEY is not set; quote notifications cannot be delivered");
            warnings += 1;
        }
        if !self.routing.has_service_addresses() {
            warn!(
                fallback = %self.routing.fallback,
                "No service-specific recipients configured, using fallback"
            );
            warnings += 1;
        }
        if let Some(dev) = &self.routing.dev_override {
            warn!(dev_email = %dev, "Development mode active: all notifications redirected");
            warnings += 1;
        }

        warnings
    }
}
