//! Recipient routing configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Destination addresses per service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Landscaping team address
    #[serde(default)]
    pub landscaping: Option<String>,
    /// Outdoor construction team address
    #[serde(default)]
    pub construction: Option<String>,
    /// Used when no selected service has a configured address
    #[serde(default = "default_fallback_email")]
    pub fallback: String,
    /// Development override; replaces every computed recipient list
    #[serde(default)]
    pub dev_override: Option<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            landscaping: None,
            construction: None,
            fallback: default_fallback_email(),
            dev_override: None,
        }
    }
}

impl RoutingConfig {
    /// Whether any service-specific address is configured
    pub fn has_service_addresses(&self) -> bool {
        self.landscaping.is_some() || self.construction.is_some()
    }

    pub fn is_dev_mode(&self) -> bool {
        self.dev_override.is_some()
    }
}
