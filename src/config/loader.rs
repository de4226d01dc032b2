//! Configuration loading utilities
//!
//! Reads the environment-style settings into the typed models. Values that
//! are present but empty are treated as unset.

use super::Config;
use super::models::*;
use crate::utils::error::{QuoteError, Result};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Key/value source for configuration lookups
pub(crate) struct EnvSource<F> {
    lookup: F,
}

impl<F> EnvSource<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub(crate) fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// Get a variable, treating empty values as unset
    pub(crate) fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub(crate) fn get_or(&self, key: &str, default: String) -> String {
        self.get(key).unwrap_or(default)
    }

    pub(crate) fn parse_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.get(key) {
            Some(raw) => raw
                .parse()
                .map_err(|e| QuoteError::Config(format!("Invalid {}: {} ({})", key, raw, e))),
            None => Ok(default),
        }
    }

    pub(crate) fn list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Config {
    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = EnvSource::new(lookup);
        debug!("Loading configuration from environment-style source");

        let server = ServerConfig {
            host: env.get_or("HOST", default_host()),
            port: env.parse_or("PORT", default_port())?,
            timeout: env.parse_or("QUOTE_REQUEST_TIMEOUT_SECS", default_timeout())?,
            max_body_size: env.parse_or("QUOTE_MAX_BODY_SIZE", default_max_body_size())?,
            cors: CorsConfig {
                allowed_origins: env.list("QUOTE_CORS_ORIGINS"),
            },
        };

        let email = EmailConfig {
            api_key: env.get("RESEND_API_KEY"),
            api_base: env.get_or("QUOTE_EMAIL_API_BASE", default_email_api_base()),
            from: env.get_or("QUOTE_FROM_EMAIL", default_from_email()),
            reply_to: env.get("QUOTE_REPLY_TO"),
            timeout_secs: env.parse_or("QUOTE_EMAIL_TIMEOUT_SECS", default_email_timeout())?,
        };

        let routing = RoutingConfig {
            landscaping: env.get("QUOTE_TO_EMAIL_LANDSCAPING"),
            construction: env.get("QUOTE_TO_EMAIL_CONSTRUCTION"),
            fallback: env.get_or("QUOTE_TO_EMAIL_FALLBACK", default_fallback_email()),
            dev_override: env.get("QUOTE_DEV_EMAIL"),
        };

        let rate_limit = RateLimitConfig {
            requests_per_minute: env.parse_or("QUOTE_RATE_LIMIT_PER_MIN", default_rpm())?,
            ..RateLimitConfig::default()
        };

        let intake = IntakeConfig {
            honeypot_field: env.get_or("QUOTE_HONEYPOT_FIELD", default_honeypot_field()),
            business_name: env.get_or("QUOTE_BUSINESS_NAME", default_business_name()),
            draft_dir: env
                .get("QUOTE_DRAFT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_draft_dir),
        };

        let config = Self {
            server,
            email,
            routing,
            rate_limit,
            intake,
        };
        config.validate()?;
        Ok(config)
    }
}
