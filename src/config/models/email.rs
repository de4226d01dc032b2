//! Email provider configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Email provider configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// Provider API key
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
    /// Provider API base URL
    #[serde(default = "default_email_api_base")]
    pub api_base: String,
    /// Sender address
    #[serde(default = "default_from_email")]
    pub from: String,
    /// Reply-to override for the internal notification
    #[serde(default)]
    pub reply_to: Option<String>,
    /// Per-send timeout in seconds
    #[serde(default = "default_email_timeout")]
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: default_email_api_base(),
            from: default_from_email(),
            reply_to: None,
            timeout_secs: default_email_timeout(),
        }
    }
}

impl EmailConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_base", &self.api_base)
            .field("from", &self.from)
            .field("reply_to", &self.reply_to)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
