//! Recipient routing for quote notifications
//!
//! Maps the selected services onto the configured team addresses.

use crate::config::models::routing::RoutingConfig;
use crate::core::quote::ServiceSelection;

/// Where the internal notification goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    /// Addresses the notification is actually sent to
    pub recipients: Vec<String>,
    /// Addresses the notification would go to without the development override
    pub intended: Vec<String>,
    /// Whether the development override replaced `intended`
    pub dev_override: bool,
}

/// Resolves recipients from a [`RoutingConfig`]
#[derive(Debug, Clone)]
pub struct RecipientRouter {
    config: RoutingConfig,
}

impl RecipientRouter {
    pub fn new(config: RoutingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Compute the recipient list for a selection
    pub fn route(&self, services: ServiceSelection) -> RoutingDecision {
        let mut intended: Vec<String> = Vec::with_capacity(2);

        for address in self.service_addresses(services).into_iter().map(|(_, a)| a) {
            if !intended.iter().any(|existing| existing == address) {
                intended.push(address.to_string());
            }
        }

        if intended.is_empty() {
            intended.push(self.config.fallback.clone());
        }

        match &self.config.dev_override {
            Some(dev) => RoutingDecision {
                recipients: vec![dev.clone()],
                intended,
                dev_override: true,
            },
            None => RoutingDecision {
                recipients: intended.clone(),
                intended,
                dev_override: false,
            },
        }
    }

    /// Contact lines for the customer confirmation, e.g. `Landscaping: team@example.com`.
    ///
    /// Falls back to the bare fallback address when no selected service has one.
    pub fn contact_lines(&self, services: ServiceSelection) -> Vec<String> {
        let lines: Vec<String> = self
            .service_addresses(services)
            .into_iter()
            .map(|(label, address)| format!("{}: {}", label, address))
            .collect();

        if lines.is_empty() {
            vec![self.config.fallback.clone()]
        } else {
            lines
        }
    }

    /// Selected services that have a configured address, in form order
    fn service_addresses(&self, services: ServiceSelection) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if services.landscaping {
            if let Some(address) = self.config.landscaping.as_deref() {
                pairs.push(("Landscaping", address));
            }
        }
        if services.outdoor_construction {
            if let Some(address) = self.config.construction.as_deref() {
                pairs.push(("Construction", address));
            }
        }
        pairs
    }
}
